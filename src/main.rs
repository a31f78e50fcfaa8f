use std::ops::Range;

use linked_sequence::LinkedSequence;

fn insert_range(seq: &mut LinkedSequence<i32>, values: Range<i32>) {
    for value in values {
        seq.push_front(value);
    }
}

fn main() {
    let mut lists_a: Vec<LinkedSequence<i32>> =
        (0..10).map(|_| LinkedSequence::new()).collect();

    insert_range(&mut lists_a[2], 10..12);
    insert_range(&mut lists_a[5], 12..14);
    insert_range(&mut lists_a[7], 14..16);

    assert_eq!(lists_a[2], LinkedSequence::from([11, 10]));
    assert_eq!(lists_a[5], LinkedSequence::from([13, 12]));
    assert_eq!(lists_a[7], LinkedSequence::from([15, 14]));

    let mut lists_b = lists_a.clone();

    insert_range(&mut lists_b[2], 20..22);
    insert_range(&mut lists_b[5], 22..24);
    insert_range(&mut lists_b[7], 24..26);

    assert_eq!(lists_b[2], LinkedSequence::from([21, 20, 11, 10]));
    assert_eq!(lists_b[5], LinkedSequence::from([23, 22, 13, 12]));
    assert_eq!(lists_b[7], LinkedSequence::from([25, 24, 15, 14]));

    assert_eq!(lists_a[2].pop_front(), Some(11));

    let mut cursor = lists_a[5].cursor_mut();
    cursor.move_next();
    cursor.insert_after(100);

    let mut cursor = lists_b[5].cursor_mut();
    cursor.move_next();
    cursor.move_next();
    assert_eq!(cursor.remove_next(), Some(13));

    lists_b[7].clear();

    assert_eq!(lists_a[2], LinkedSequence::from([10]));
    assert_eq!(lists_a[5], LinkedSequence::from([13, 100, 12]));
    assert_eq!(lists_b[5], LinkedSequence::from([23, 22, 12]));
    assert_eq!(lists_b[7], LinkedSequence::new());

    for (slot, seq) in lists_a.iter().enumerate() {
        if !seq.is_empty() {
            println!("a[{}]: {:?}", slot, seq);
        }
    }
    for (slot, seq) in lists_b.iter().enumerate() {
        if !seq.is_empty() {
            println!("b[{}]: {:?}", slot, seq);
        }
    }
}
