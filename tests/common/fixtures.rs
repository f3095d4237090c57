//! Test data fixtures shared by the integration tests

/// People table with a header row, as CSV with a space after each comma
pub fn people_csv() -> &'static str {
    "month, age, gender, name, blood type\n\
     may, 30, male, john, A\n\
     june, 32, female, peter, O\n\
     july, 33, male, charles, B\n\
     september, 34, alien, bob, AB\n"
}

/// Same table as [`people_csv`] in the `Headers`/`Rows` JSON layout
pub fn people_json() -> &'static str {
    r#"{
  "Headers": ["month", "age", "gender", "name", "blood type"],
  "Rows": [
    ["may", "30", "male", "john", "A"],
    ["june", "32", "female", "peter", "O"],
    ["july", "33", "male", "charles", "B"],
    ["september", "34", "alien", "bob", "AB"]
  ]
}"#
}

pub fn people_headers() -> Vec<String> {
    super::strings(&["month", "age", "gender", "name", "blood type"])
}

pub fn people_rows() -> Vec<Vec<String>> {
    super::matrix(&[
        &["may", "30", "male", "john", "A"],
        &["june", "32", "female", "peter", "O"],
        &["july", "33", "male", "charles", "B"],
        &["september", "34", "alien", "bob", "AB"],
    ])
}

/// Rendering of the people table
pub fn people_markdown() -> &'static str {
    "| month  | age  | gender  | name  | blood type    |\n\
     |-------|-------|-------|-------|-------|\n\
     | may    | 30    | male    | john    | A    |\n\
     | june    | 32    | female    | peter    | O    |\n\
     | july    | 33    | male    | charles    | B    |\n\
     | september    | 34    | alien    | bob    | AB    |\n"
}
