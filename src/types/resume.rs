use serde::Serialize;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ParsedResume {
    pub name: String,
    pub education: Vec<String>,
    pub experience: Vec<String>,
    pub skills: Vec<String>,
    pub raw_text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
}
