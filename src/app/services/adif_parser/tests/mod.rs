//! Tests for the ADIF parser module


/// Build a minimal ADIF document from record bodies
pub fn adif_with_records(records: &[&str]) -> String {
    let mut text = String::from("Generated for tests\n<adif_ver:5>3.1.4\n<eoh>\n");
    for record in records {
        text.push_str(record);
        text.push_str("<eor>\n");
    }
    text
}
