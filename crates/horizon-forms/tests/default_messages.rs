//! Replacing a default message after controls exist.
//!
//! The message registry is process-wide, so this lives in its own test
//! binary to keep other tests on the stock wording.

use horizon_forms::messages;
use horizon_forms::prelude::*;

#[test]
fn test_replaced_message_reaches_existing_select_box() {
    let mut select = SelectBox::new("size").with_items(ItemSet::from_labels(["S", "M", "L"]));
    assert!(!select.validate());
    assert_eq!(select.errors(), ["Please select a valid option."]);

    messages::set_default_message(SelectBox::VALID, "Pick a size.");

    assert!(!select.validate());
    assert_eq!(select.errors(), ["Pick a size."]);
    assert_eq!(
        messages::default_message(SelectBox::VALID).as_deref(),
        Some("Pick a size.")
    );
}
