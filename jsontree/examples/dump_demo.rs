// Example: parse a document, read a few values, and dump the tree

use jsontree::{parse, Node, ParseError};

fn main() -> Result<(), ParseError> {
    let json = r#"{
        "device": "sensor-12",
        "enabled": true,
        "thresholds": [12.5, 30, -4e-2],
        "location": {"room": "lab", "floor": 2},
        "notes": null
    }"#;

    println!("Input: {}", json);
    let root = parse(json)?;

    let device = root.get("device").map_or("", Node::as_str);
    let floor = root
        .get("location")
        .and_then(|location| location.get("floor"))
        .map_or(0, Node::as_int);
    println!("device = {device}, floor = {floor}");

    if let Some(thresholds) = root.get("thresholds") {
        for (index, threshold) in thresholds.children().enumerate() {
            println!("threshold[{index}] = {}", threshold.as_f64());
        }
    }

    println!();
    println!("Tree dump:");
    root.print();

    // Malformed input yields an error and no tree
    match parse(r#"{"device": "sensor-12""#) {
        Ok(_) => println!("unexpectedly parsed"),
        Err(e) => println!("Truncated document rejected: {e}"),
    }

    jsontree::free(Some(root));
    Ok(())
}
