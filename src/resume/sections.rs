/// Header vocabulary for one resume section.
///
/// A line opens the section when it contains any `targets` entry
/// (case-insensitive substring). The section closes before the first later
/// line containing any `others` entry that is not also a target.
#[derive(Debug, Clone, Copy)]
pub struct SectionHeaders {
    pub targets: &'static [&'static str],
    pub others: &'static [&'static str],
}

pub const EDUCATION: SectionHeaders = SectionHeaders {
    targets: &["education", "academic background", "degrees"],
    others: &[
        "experience",
        "skills",
        "projects",
        "publications",
        "work experience",
        "professional experience",
    ],
};

pub const EXPERIENCE: SectionHeaders = SectionHeaders {
    targets: &["experience", "work experience", "professional experience"],
    others: &[
        "education",
        "skills",
        "projects",
        "publications",
        "academic background",
        "degrees",
    ],
};

pub const SKILLS: SectionHeaders = SectionHeaders {
    targets: &["skills", "technical skills", "core competencies"],
    others: &[
        "education",
        "experience",
        "projects",
        "publications",
        "work experience",
        "professional experience",
        "academic background",
        "degrees",
    ],
};

impl SectionHeaders {
    fn opens(&self, line: &str) -> bool {
        let lowered = line.to_lowercase();
        self.targets.iter().any(|header| lowered.contains(header))
    }

    fn closes(&self, line: &str) -> bool {
        let lowered = line.to_lowercase();
        self.others
            .iter()
            .filter(|header| !self.targets.contains(header))
            .any(|header| lowered.contains(header))
    }
}

/// Non-empty trimmed lines of the section, or nothing when no line opens it.
pub fn extract_section(text: &str, headers: &SectionHeaders) -> Vec<String> {
    let lines: Vec<&str> = text.split('\n').map(str::trim).collect();

    let Some(start) = lines
        .iter()
        .position(|line| headers.opens(line))
        .map(|index| index + 1)
    else {
        return Vec::new();
    };

    let end = lines[start..]
        .iter()
        .position(|line| headers.closes(line))
        .map_or(lines.len(), |offset| start + offset);

    lines[start..end]
        .iter()
        .filter(|line| !line.is_empty())
        .map(|line| line.to_string())
        .collect()
}
