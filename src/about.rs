pub fn about() -> Vec<String> {
    vec![
        "Record the dishes on tonight's menu, see the average price of each \
        course, and browse the menu one course at a time."
            .to_string(),
        "\n".to_string(),
        "Dishes are kept in memory only and are cleared when the program closes."
            .to_string(),
        format!("Version {}", env!("CARGO_PKG_VERSION")),
    ]
}
