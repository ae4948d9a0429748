use std::ffi::OsStr;
use std::path::Path;

pub trait PathExt {
    fn is_csv_file(&self) -> bool;
}

impl PathExt for Path {
    fn is_csv_file(&self) -> bool {
        self.extension() == Some(OsStr::new("csv"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognizes_csv_extensions_only() {
        assert!(Path::new("data/values.csv").is_csv_file());
        assert!(!Path::new("data/values.txt").is_csv_file());
        assert!(!Path::new("values").is_csv_file());
    }
}
