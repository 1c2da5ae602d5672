//! Demonstration of modeling a branching condition flow as one bit sequence.
//!
//! Four booleans from a signup funnel become a 4-bit sequence validated
//! against the accepted states [8, 9, 14, 15]; the branching then reads the
//! sequence instead of re-testing each flag.

use bitgate::{bits, BitSequence, SequenceConfig, ValidationRule};
use serde_json::json;

fn describe_state(created: bool, entered: bool, confirmed: bool, opted_in: bool) -> bitgate::Result<()> {
    // accepted: 1000, 1001, 1110, 1111
    let config = SequenceConfig::new().validation(ValidationRule::pattern_set([8u64, 9, 14, 15]));
    let seq = BitSequence::new(config, &[&created, &entered, &confirmed, &opted_in])?;

    print!("  state {} (value {:>2}): ", seq, seq.to_int());
    if !seq.is_valid() {
        println!("inconsistent, rejected");
        return Ok(());
    }
    if seq.to_int() > 10 {
        print!("email confirmed, ");
    } else {
        print!("no email yet, ");
    }
    if seq.get(3)? == 1 {
        println!("send the newsletter");
    } else {
        println!("no newsletter");
    }
    Ok(())
}

fn main() -> bitgate::Result<()> {
    // Initialize tracing subscriber to see the construction/evaluation events
    tracing_subscriber::fmt().with_max_level(tracing::Level::DEBUG).init();

    println!("=== Condition Flow Demonstration ===\n");

    println!("1. Mixed values collapse to bits:");
    let seq = bits![true, 0, "x", ""];
    println!("  bits![true, 0, \"x\", \"\"] renders {} (value {})\n", seq, seq.to_int());

    println!("2. Signup funnel states:");
    describe_state(true, false, false, false)?;
    describe_state(true, false, false, true)?;
    describe_state(true, true, true, false)?;
    describe_state(true, true, true, true)?;
    describe_state(false, true, true, true)?;
    describe_state(true, true, false, false)?;

    println!("\n3. Bad configuration is rejected up front:");
    let config = SequenceConfig::new().validation_payload(json!({"accept": [8, 9]}));
    match BitSequence::new(config, &[&true, &false]) {
        Ok(_) => println!("  unexpected"),
        Err(err) => println!("  {err}"),
    }

    let mut seq = bits![true, false];
    match seq.set(5, true) {
        Ok(_) => println!("  unexpected"),
        Err(err) => println!("  {err}"),
    }

    println!("\n=== Demo Complete ===");
    Ok(())
}
