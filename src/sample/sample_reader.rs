use std::path::Path;

use crate::BoostError;
use super::sample_struct::Sample;


/// A struct that returns [`Sample`].
/// Using this struct, one can read a CSV format file to [`Sample`].
/// Other formats are not supported.
/// # Example
/// The following code is a simple example to read a CSV file.
/// ```no_run
/// use adaboost_cv::SampleReader;
/// let filename = "/path/to/csv/file.csv";
/// let sample = SampleReader::new()
///     .file(filename)
///     .has_header(true)
///     .target_feature("class")
///     .read()
///     .unwrap();
/// ```
pub struct SampleReader<P, S> {
    file: Option<P>,
    has_header: bool,
    target: Option<S>,
}


impl<P, S> SampleReader<P, S> {
    /// Construct a new instance of [`SampleReader`].
    pub fn new() -> Self {
        Self {
            file: None,
            has_header: false,
            target: None,
        }
    }


    /// Set the flag whether the file has the header row or not.
    /// Default is `false.`
    pub fn has_header(mut self, flag: bool) -> Self {
        self.has_header = flag;
        self
    }
}


impl<P, S> Default for SampleReader<P, S> {
    fn default() -> Self {
        Self::new()
    }
}


impl<P, S> SampleReader<P, S>
    where P: AsRef<Path>
{
    /// Set the file name.
    pub fn file(mut self, file: P) -> Self {
        self.file = Some(file);
        self
    }
}


impl<P, S> SampleReader<P, S>
    where S: AsRef<str>
{
    /// Set the column name that is used for target label.
    /// The each item of the column takes value in `{-1, +1}.`
    /// Without a header, columns are named `Feat. [1]`, `Feat. [2]`, ...
    pub fn target_feature(mut self, column: S) -> Self {
        self.target = Some(column);
        self
    }
}


impl<P, S> SampleReader<P, S>
    where P: AsRef<Path>,
          S: AsRef<str>
{
    /// Reads the file based on the arguments,
    /// and returns `Result<Sample, BoostError>`.
    /// This method consumes `self.`
    pub fn read(self) -> Result<Sample, BoostError> {
        let file = self.file
            .ok_or_else(|| BoostError::InvalidParameter(
                "The file name for csv is not set. \
                Use `SampleReader::file`.".to_string()
            ))?;
        let target = self.target
            .ok_or_else(|| BoostError::InvalidParameter(
                "Target (class) column is not specified. \
                Use `SampleReader::target_feature`.".to_string()
            ))?;

        Sample::from_csv(file.as_ref(), self.has_header)?
            .set_target(target.as_ref())
    }
}
