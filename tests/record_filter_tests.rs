//! Completeness-filter behavior over the accumulated record set.

use medscrape::record::{Record, filter_complete};
use proptest::prelude::*;

fn complete(name: &str) -> Record {
    Record {
        address: "12 MG Rd, Pune".into(),
        name: name.into(),
        specialty: "Cardiologist".into(),
        phone: "02045678901".into(),
        ..Record::default()
    }
}

#[test]
fn survivors_satisfy_the_completeness_invariant() {
    let records = vec![
        complete("Dr. A"),
        Record {
            phone: String::new(),
            ..complete("Dr. B")
        },
        Record {
            address: "   ".into(),
            ..complete("Dr. C")
        },
        complete("Dr. D"),
    ];

    let kept = filter_complete(records);
    assert_eq!(kept.len(), 2);
    for record in &kept {
        assert!(!record.address.trim().is_empty());
        assert!(!record.name.trim().is_empty());
        assert!(!record.specialty.trim().is_empty());
        assert!(!record.phone.trim().is_empty());
    }
}

#[test]
fn filtering_preserves_original_order() {
    let mut records = Vec::new();
    for i in 0..1000 {
        let mut record = complete(&format!("Dr. {i}"));
        // 300 reveals failed; those records lose their place in the
        // dataset.
        if i % 10 < 3 {
            record.phone = String::new();
        }
        records.push(record);
    }

    let kept = filter_complete(records);
    assert_eq!(kept.len(), 700);

    let names: Vec<&str> = kept.iter().map(|r| r.name.as_str()).collect();
    let mut sorted_by_index: Vec<usize> = names
        .iter()
        .map(|n| n.trim_start_matches("Dr. ").parse::<usize>().unwrap())
        .collect();
    let original = sorted_by_index.clone();
    sorted_by_index.sort_unstable();
    assert_eq!(original, sorted_by_index);
}

#[test]
fn filtering_twice_is_a_no_op() {
    let records = vec![
        complete("Dr. A"),
        Record {
            specialty: String::new(),
            ..complete("Dr. B")
        },
    ];

    let once = filter_complete(records);
    let twice = filter_complete(once.clone());
    assert_eq!(once, twice);
}

fn arb_field() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        Just("   ".to_string()),
        "[a-zA-Z0-9 ]{1,12}".prop_map(|s| s),
    ]
}

proptest! {
    #[test]
    fn filter_is_idempotent_for_arbitrary_records(
        fields in proptest::collection::vec((arb_field(), arb_field(), arb_field(), arb_field()), 0..40)
    ) {
        let records: Vec<Record> = fields
            .into_iter()
            .map(|(address, name, specialty, phone)| Record {
                address,
                name,
                specialty,
                phone,
                ..Record::default()
            })
            .collect();

        let once = filter_complete(records);
        let twice = filter_complete(once.clone());
        prop_assert_eq!(once, twice);
    }
}
