use std::fmt;
use std::path::Path;

/// Source category recognized from a file extension.
///
/// The variant order is the order used when two categories tie in a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum FileType {
    #[default]
    Unknown,
    /// `.cpp`, `.cxx`, `.cc`
    Cpp,
    /// `.hpp`, `.hxx`, `.hh`
    CppHeader,
    /// `.c`
    C,
    /// `.h`
    CHeader,
    /// `.mm`
    ObjectiveCpp,
}

const EXTENSION_TABLE: &[(&str, FileType)] = &[
    ("cpp", FileType::Cpp),
    ("cxx", FileType::Cpp),
    ("cc", FileType::Cpp),
    ("hpp", FileType::CppHeader),
    ("hxx", FileType::CppHeader),
    ("hh", FileType::CppHeader),
    ("c", FileType::C),
    ("h", FileType::CHeader),
    ("mm", FileType::ObjectiveCpp),
];

impl FileType {
    /// All recognized categories, excluding `Unknown`.
    pub const KNOWN: [Self; 5] = [
        Self::Cpp,
        Self::CppHeader,
        Self::C,
        Self::CHeader,
        Self::ObjectiveCpp,
    ];

    /// Resolve an extension given without the leading dot. Case-insensitive.
    #[must_use]
    pub fn from_extension(ext: &str) -> Self {
        EXTENSION_TABLE
            .iter()
            .find(|(known, _)| known.eq_ignore_ascii_case(ext))
            .map_or(Self::Unknown, |&(_, file_type)| file_type)
    }

    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        path.extension()
            .and_then(|ext| ext.to_str())
            .map_or(Self::Unknown, Self::from_extension)
    }

    #[must_use]
    pub const fn is_known(self) -> bool {
        !matches!(self, Self::Unknown)
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Unknown => "Unknown",
            Self::Cpp => "C++",
            Self::CppHeader => "C++ Header",
            Self::C => "C",
            Self::CHeader => "C Header",
            Self::ObjectiveCpp => "Objective-C++",
        }
    }

    /// Extensions (without the dot) that map to this category.
    pub fn extensions(self) -> impl Iterator<Item = &'static str> {
        EXTENSION_TABLE
            .iter()
            .filter(move |(_, file_type)| *file_type == self)
            .map(|(ext, _)| *ext)
    }
}

/// One line per recognized category, e.g. `  C++            .cpp .cxx .cc`.
#[must_use]
pub fn recognized_extensions() -> String {
    FileType::KNOWN
        .iter()
        .map(|file_type| {
            let exts: Vec<String> = file_type.extensions().map(|e| format!(".{e}")).collect();
            format!("  {:<15}{}", file_type.name(), exts.join(" "))
        })
        .collect::<Vec<_>>()
        .join("\n")
}

impl fmt::Display for FileType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
#[path = "file_type_tests.rs"]
mod tests;
