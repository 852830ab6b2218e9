use std::fmt;

use ruleval_validator::{Validate, Validator};

#[derive(Validate)]
pub struct Address {
    #[validate(rules = "required", label = "City")]
    city: String,
}

#[derive(Validate)]
pub struct Line {
    #[validate(rules = "min:1")]
    qty: u32,
}

#[derive(Validate)]
#[validate(check = Order::has_lines)]
pub struct Order {
    #[validate(nested)]
    address: Address,

    #[validate(each, rules = "required")]
    lines: Vec<Line>,
}

struct NoLines;

impl fmt::Display for NoLines {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an order needs at least one line")
    }
}

impl Order {
    fn has_lines(&self) -> Result<(), NoLines> {
        if self.lines.is_empty() { Err(NoLines) } else { Ok(()) }
    }
}

fn main() {
    let order = Order {
        address: Address { city: String::new() },
        lines: vec![Line { qty: 0 }],
    };

    let report = Validator::default().check_record(&order);
    assert_eq!(report.len(), 2);
}
