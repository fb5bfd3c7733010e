use crate::base::Categories;
use crate::base::Config;
use crate::base::Recordlist;

/// Application filesystem.
pub struct Fs {
    dir: std::path::PathBuf,
}

/// Marker for types that are serialized to or deserialized from files.
pub trait Io: Default + ToString + std::str::FromStr {
    const FILENAME: &'static str;
}
impl Io for Config {
    const FILENAME: &'static str = ".spendwheel.json";
}
impl Io for Recordlist {
    const FILENAME: &'static str = "transactions.jsonl";
}
impl Io for Categories {
    const FILENAME: &'static str = "categories.json";
}

impl Fs {
    pub fn new<P>(dir: P) -> Self
    where
        P: Into<std::path::PathBuf>,
    {
        Self { dir: dir.into() }
    }

    /// Returns the working directory.
    pub fn dir(&self) -> &std::path::Path {
        &self.dir
    }

    pub fn is_repo(&self) -> bool {
        self.path::<Config>().is_file()
    }

    /// Returns the path which `T` will be serialized to and deserialized from.
    pub fn path<T>(&self) -> std::path::PathBuf
    where
        T: Io,
    {
        self.dir.join(T::FILENAME)
    }

    /// Deserializes `T` from disk. If `T`'s file does not exist, returns `T::default()`.
    pub fn read<T>(&self) -> Result<T, ReadError>
    where
        T: Io,
        <T as std::str::FromStr>::Err: std::error::Error + Send + Sync + 'static,
    {
        let path = self.path::<T>();
        match std::fs::read_to_string(&path) {
            Ok(s) => s
                .parse()
                .map_err(|e| Box::new(e) as Box<dyn std::error::Error + Send + Sync>)
                .map_err(ReadError::Serde),
            Err(e) => match e.kind() {
                std::io::ErrorKind::NotFound => {
                    log::debug!("'{}' not found, using defaults", path.display());
                    Ok(T::default())
                }
                _ => Err(ReadError::Io(e)),
            },
        }
    }

    pub fn write<T>(&self, obj: &T) -> std::io::Result<()>
    where
        T: Io,
    {
        let path = self.path::<T>();
        std::fs::write(&path, obj.to_string())?;
        log::info!("wrote '{}'", path.display());
        Ok(())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ReadError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Serde(#[from] Box<dyn std::error::Error + Send + Sync>),
    // This box can be removed once specialization stabilizes.
}

#[cfg(test)]
mod tests {
    use indoc::indoc;

    use super::*;

    /// Returns a filesystem object anchored at a temporary directory. The `Fs`
    /// must not outlive the returned `TempDir`.
    fn tempfs() -> (Fs, tempfile::TempDir) {
        let td = tempfile::TempDir::new().unwrap();
        let fs = Fs::new(td.path());
        (fs, td)
    }

    #[test]
    fn test_path() {
        let (fs, _td) = tempfs();

        let a = fs.path::<Config>();
        let b = fs.path::<Recordlist>();
        let c = fs.path::<Categories>();
        assert_ne!(a, b);
        assert_ne!(b, c);
        assert_ne!(a, c);
    }

    #[test]
    fn test_config() {
        let (fs, _td) = tempfs();

        assert!(!fs.is_repo());
        assert_eq!(fs.read::<Config>().unwrap(), Config::default());

        let s = r#"{"useColoredOutput": true, "fullCircle": {"unit": "degrees"}}"#;
        let config = s.parse::<Config>().unwrap();
        std::fs::write(fs.path::<Config>(), s).unwrap();
        assert!(fs.is_repo());
        assert_eq!(fs.read::<Config>().unwrap(), config);

        fs.write(&config).unwrap();
        assert_eq!(
            std::fs::read_to_string(fs.path::<Config>()).unwrap(),
            indoc!(
                r##"
                {
                  "firstIndexInDate": 0,
                  "useColoredOutput": true,
                  "useUnicodeSymbols": false,
                  "palette": [
                    "#ff6384",
                    "#36a2eb",
                    "#ffce56",
                    "#4bc0c0",
                    "#9966ff",
                    "#ff9f40",
                    "#c9cbcf"
                  ],
                  "fullCircle": {
                    "unit": "degrees"
                  }
                }
                "##
            )
        );
    }

    #[test]
    fn test_read_failing() {
        let (fs, _td) = tempfs();
        std::fs::write(fs.path::<Recordlist>(), "not json\n").unwrap();
        assert!(matches!(
            fs.read::<Recordlist>(),
            Err(ReadError::Serde(_))
        ));
    }

    #[test]
    fn test_categories_roundtrip() {
        let (fs, _td) = tempfs();
        assert_eq!(fs.read::<Categories>().unwrap(), Categories::new());
        let cats = Categories::defaults();
        fs.write(&cats).unwrap();
        assert_eq!(fs.read::<Categories>().unwrap(), cats);
    }
}
