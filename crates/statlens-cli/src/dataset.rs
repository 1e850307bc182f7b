//! Loading and validating the datasets given on the command line.

use std::{borrow::Cow, convert::Infallible, str::FromStr};

use statlens_stats::parse::parse_numbers;

use crate::util;

/// Where the text of a dataset comes from.
///
/// `-` selects standard input; anything else is the dataset itself, for
/// example `"1, 2, 3"`.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::IsVariant)]
pub enum DataSource {
    Stdin,
    Inline(String),
}

impl FromStr for DataSource {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "-" {
            Ok(Self::Stdin)
        } else {
            Ok(Self::Inline(s.to_owned()))
        }
    }
}

impl DataSource {
    fn read(&self) -> anyhow::Result<Cow<'_, str>> {
        match self {
            Self::Stdin => Ok(Cow::Owned(util::read_stdin()?)),
            Self::Inline(text) => Ok(Cow::Borrowed(text)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum DatasetError {
    #[display("Please enter at least one valid number in Dataset 1.")]
    EmptyPrimary,
    #[display("Only one dataset can be read from standard input.")]
    StdinUsedTwice,
}

/// Dataset 1 and the optional comparison dataset.
///
/// `primary` is never empty. `secondary` is `None` when no comparison dataset
/// was given or when it held no valid numbers.
#[derive(Debug, Clone, PartialEq)]
pub struct Datasets {
    pub primary: Vec<f64>,
    pub secondary: Option<Vec<f64>>,
}

impl Datasets {
    pub fn read(primary: &DataSource, secondary: Option<&DataSource>) -> anyhow::Result<Self> {
        if primary.is_stdin() && secondary.is_some_and(DataSource::is_stdin) {
            return Err(DatasetError::StdinUsedTwice.into());
        }
        let primary = primary.read()?;
        let secondary = secondary.map(DataSource::read).transpose()?;
        let datasets = Self::from_text(&primary, secondary.as_deref())?;
        tracing::debug!(
            primary = datasets.primary.len(),
            secondary = datasets.secondary.as_ref().map(Vec::len),
            "datasets parsed"
        );
        Ok(datasets)
    }

    pub fn from_text(primary: &str, secondary: Option<&str>) -> Result<Self, DatasetError> {
        let primary = parse_numbers(primary);
        if primary.is_empty() {
            return Err(DatasetError::EmptyPrimary);
        }

        let secondary = secondary.map(parse_numbers).filter(|values| {
            if values.is_empty() {
                tracing::warn!("Dataset 2 has no valid numbers, showing Dataset 1 only");
            }
            !values.is_empty()
        });

        Ok(Self { primary, secondary })
    }

    pub fn is_comparison(&self) -> bool {
        self.secondary.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_source_from_str() {
        assert_eq!("-".parse::<DataSource>(), Ok(DataSource::Stdin));
        assert_eq!(
            "1, 2".parse::<DataSource>(),
            Ok(DataSource::Inline("1, 2".to_owned()))
        );
    }

    #[test]
    fn test_empty_primary_is_rejected() {
        assert_eq!(
            Datasets::from_text("abc, ,", None),
            Err(DatasetError::EmptyPrimary)
        );
        assert_eq!(
            DatasetError::EmptyPrimary.to_string(),
            "Please enter at least one valid number in Dataset 1."
        );
    }

    #[test]
    fn test_empty_secondary_is_ignored() {
        let datasets = Datasets::from_text("1 2 3", Some("x y")).unwrap();
        assert_eq!(datasets.primary, vec![1.0, 2.0, 3.0]);
        assert!(!datasets.is_comparison());
    }

    #[test]
    fn test_comparison() {
        let datasets = Datasets::from_text("1,2,3", Some("4,5")).unwrap();
        assert_eq!(datasets.secondary, Some(vec![4.0, 5.0]));
        assert!(datasets.is_comparison());
    }

    #[test]
    fn test_stdin_twice_is_rejected() {
        let err = Datasets::read(&DataSource::Stdin, Some(&DataSource::Stdin)).unwrap_err();
        assert_eq!(
            err.downcast_ref::<DatasetError>(),
            Some(&DatasetError::StdinUsedTwice)
        );
    }

    #[test]
    fn test_read_inline() {
        let datasets = Datasets::read(
            &DataSource::Inline("5 6".to_owned()),
            Some(&DataSource::Inline("7".to_owned())),
        )
        .unwrap();
        assert_eq!(datasets.primary, vec![5.0, 6.0]);
        assert_eq!(datasets.secondary, Some(vec![7.0]));
    }
}
