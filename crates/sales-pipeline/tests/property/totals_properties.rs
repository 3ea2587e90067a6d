use proptest::prelude::*;
use sales_core::types::{DefinitionKind, Definitions};
use sales_pipeline::definitions::split_fields;
use sales_pipeline::records::parse_amount;
use sales_pipeline::{write_summary, Aggregator, SalesRecord};
use tempfile::TempDir;

const BRANCHES: [&str; 3] = ["001", "002", "003"];
const COMMODITIES: [&str; 2] = ["SFT00001", "SFT00002"];

fn tables() -> (Definitions, Definitions) {
    let mut branch = Definitions::new(DefinitionKind::Branch);
    for code in BRANCHES {
        branch.define(code, "b");
    }
    let mut commodity = Definitions::new(DefinitionKind::Commodity);
    for code in COMMODITIES {
        commodity.define(code, "c");
    }
    (branch, commodity)
}

fn record_strategy(max_amount: u64) -> impl Strategy<Value = SalesRecord> {
    (0..BRANCHES.len(), 0..COMMODITIES.len(), 0..=max_amount).prop_map(|(b, c, amount)| {
        SalesRecord {
            branch_code: BRANCHES[b].to_string(),
            commodity_code: COMMODITIES[c].to_string(),
            amount,
        }
    })
}

proptest! {
    #[test]
    fn both_tables_sum_to_accepted_amounts(
        records in prop::collection::vec(record_strategy(1_000_000), 0..50)
    ) {
        let (mut branch, mut commodity) = tables();
        let aggregator = Aggregator::default();
        let mut accepted: u128 = 0;
        for record in &records {
            aggregator
                .apply(record, "00000001.rcd", &mut branch.totals, &mut commodity.totals)
                .unwrap();
            accepted += u128::from(record.amount);
        }
        prop_assert_eq!(branch.totals.grand_total(), accepted);
        prop_assert_eq!(commodity.totals.grand_total(), accepted);
    }

    #[test]
    fn totals_never_reach_the_bound(
        digits in 1u32..=6,
        amounts in prop::collection::vec(0u64..2_000_000, 1..40)
    ) {
        let (mut branch, _) = tables();
        let aggregator = Aggregator::with_digits(digits);
        for amount in amounts {
            let before = branch.totals.get("001").unwrap();
            match aggregator.accumulate(
                &mut branch.totals,
                DefinitionKind::Branch,
                "001",
                amount,
                "00000001.rcd",
            ) {
                Ok(total) => {
                    prop_assert!(total <= aggregator.max_total());
                    prop_assert_eq!(total, before + amount);
                }
                Err(_) => {
                    prop_assert!(before + amount > aggregator.max_total());
                    prop_assert_eq!(branch.totals.get("001").unwrap(), before);
                }
            }
        }
    }

    #[test]
    fn digit_strings_parse_to_their_value(value in any::<u64>()) {
        prop_assert_eq!(parse_amount(&value.to_string()), Some(value));
    }

    #[test]
    fn non_digit_strings_are_rejected(value in ".*[^0-9].*") {
        prop_assert_eq!(parse_amount(&value), None);
    }

    #[test]
    fn summary_lines_split_back_into_definitions(
        entries in prop::collection::vec(("[0-9]{3}", "[A-Za-z ]{0,12}"), 1..20),
        total in any::<u64>()
    ) {
        let mut branch = Definitions::new(DefinitionKind::Branch);
        for (code, name) in &entries {
            branch.define(code, name);
            branch.totals.set(code, total);
        }
        let dir = TempDir::new().unwrap();
        write_summary(
            dir.path(),
            "branch.out",
            DefinitionKind::Branch,
            &branch.names,
            &branch.totals,
        )
        .unwrap();

        let written = std::fs::read_to_string(dir.path().join("branch.out")).unwrap();
        let parsed: Vec<(String, String, u64)> = written
            .lines()
            .map(|line| {
                let fields = split_fields(line);
                (fields[0].to_string(), fields[1].to_string(), fields[2].parse().unwrap())
            })
            .collect();
        let expected: Vec<(String, String, u64)> = branch
            .names
            .iter()
            .map(|(code, name)| (code.clone(), name.clone(), total))
            .collect();
        prop_assert_eq!(parsed, expected);
    }
}
