//! Predefined topic catalogs.
//!
//! Fixed configuration data used to populate topic pickers: six Linux
//! distributions, six programming topics, and six data-analysis topics.
//! Loaded once per process and exposed through read-only accessors; never
//! mutated at runtime.

use once_cell::sync::Lazy;

use crate::model::{DataAnalysisTopic, DataTopicKind, LinuxDistro, ProgrammingTopic};

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

fn distro(name: &str, package_manager: &str, init_system: &str, logo: &str) -> LinuxDistro {
    LinuxDistro {
        name: name.to_string(),
        package_manager: package_manager.to_string(),
        init_system: init_system.to_string(),
        logo: logo.to_string(),
    }
}

static LINUX_DISTROS: Lazy<Vec<LinuxDistro>> = Lazy::new(|| {
    vec![
        distro("Ubuntu", "APT", "systemd", "\u{1F427}"),
        distro("Arch Linux", "pacman", "systemd", "\u{26A1}"),
        distro("Fedora", "dnf", "systemd", "\u{1F3A9}"),
        distro("Debian", "APT", "systemd", "\u{1F300}"),
        distro("CentOS", "yum", "systemd", "\u{1F3E2}"),
        distro("openSUSE", "zypper", "systemd", "\u{1F98E}"),
    ]
});

static PROGRAMMING_TOPICS: Lazy<Vec<ProgrammingTopic>> = Lazy::new(|| {
    vec![
        ProgrammingTopic {
            language: "Python".to_string(),
            framework: Some("Django".to_string()),
            concepts: strings(&["OOP", "Web Framework", "REST API"]),
            color: "#3776AB".to_string(),
        },
        ProgrammingTopic {
            language: "JavaScript".to_string(),
            framework: Some("React".to_string()),
            concepts: strings(&["Components", "Hooks", "State Management"]),
            color: "#F7DF1E".to_string(),
        },
        ProgrammingTopic {
            language: "TypeScript".to_string(),
            framework: Some("Angular".to_string()),
            concepts: strings(&["Types", "Decorators", "RxJS"]),
            color: "#3178C6".to_string(),
        },
        ProgrammingTopic {
            language: "Rust".to_string(),
            framework: None,
            concepts: strings(&["Ownership", "Borrowing", "Memory Safety"]),
            color: "#CE422B".to_string(),
        },
        ProgrammingTopic {
            language: "Go".to_string(),
            framework: None,
            concepts: strings(&["Concurrency", "Goroutines", "Channels"]),
            color: "#00ADD8".to_string(),
        },
        ProgrammingTopic {
            language: "Java".to_string(),
            framework: Some("Spring".to_string()),
            concepts: strings(&["JVM", "Dependency Injection", "Enterprise"]),
            color: "#ED8B00".to_string(),
        },
    ]
});

static DATA_ANALYSIS_TOPICS: Lazy<Vec<DataAnalysisTopic>> = Lazy::new(|| {
    vec![
        DataAnalysisTopic {
            name: "Python".to_string(),
            kind: DataTopicKind::Language,
            technologies: strings(&["NumPy", "Matplotlib", "Jupyter"]),
            ai_integration: strings(&["scikit-learn"]),
            color: "#3776AB".to_string(),
        },
        DataAnalysisTopic {
            name: "R".to_string(),
            kind: DataTopicKind::Language,
            technologies: strings(&["tidyverse", "ggplot2", "RStudio"]),
            ai_integration: strings(&["caret"]),
            color: "#276DC3".to_string(),
        },
        DataAnalysisTopic {
            name: "Pandas".to_string(),
            kind: DataTopicKind::Library,
            technologies: strings(&["Python", "NumPy", "DataFrames"]),
            ai_integration: strings(&["scikit-learn"]),
            color: "#150458".to_string(),
        },
        DataAnalysisTopic {
            name: "Jupyter".to_string(),
            kind: DataTopicKind::Tool,
            technologies: strings(&["Python", "IPython", "Notebooks"]),
            ai_integration: strings(&[]),
            color: "#F37626".to_string(),
        },
        DataAnalysisTopic {
            name: "TensorFlow".to_string(),
            kind: DataTopicKind::AiFramework,
            technologies: strings(&["Python", "Keras"]),
            ai_integration: strings(&["Keras", "TensorBoard"]),
            color: "#FF6F00".to_string(),
        },
        DataAnalysisTopic {
            name: "PyTorch".to_string(),
            kind: DataTopicKind::AiFramework,
            technologies: strings(&["Python", "CUDA"]),
            ai_integration: strings(&["torchvision", "Lightning"]),
            color: "#EE4C2C".to_string(),
        },
    ]
});

/// The fixed list of Linux distributions available to session pickers.
pub fn linux_distros() -> &'static [LinuxDistro] {
    &LINUX_DISTROS
}

/// The fixed list of programming topics available to session pickers.
pub fn programming_topics() -> &'static [ProgrammingTopic] {
    &PROGRAMMING_TOPICS
}

/// The fixed list of data-analysis topics available to session pickers.
pub fn data_analysis_topics() -> &'static [DataAnalysisTopic] {
    &DATA_ANALYSIS_TOPICS
}

/// Look up a distribution by name, case-insensitively.
pub fn find_distro(name: &str) -> Option<&'static LinuxDistro> {
    LINUX_DISTROS
        .iter()
        .find(|distro| distro.name.eq_ignore_ascii_case(name))
}

/// Look up a programming topic by language, case-insensitively.
pub fn find_programming_topic(language: &str) -> Option<&'static ProgrammingTopic> {
    PROGRAMMING_TOPICS
        .iter()
        .find(|topic| topic.language.eq_ignore_ascii_case(language))
}

/// Look up a data-analysis topic by name, case-insensitively.
pub fn find_data_analysis_topic(name: &str) -> Option<&'static DataAnalysisTopic> {
    DATA_ANALYSIS_TOPICS
        .iter()
        .find(|topic| topic.name.eq_ignore_ascii_case(name))
}
