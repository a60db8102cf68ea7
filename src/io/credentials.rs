use std::fmt;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use log::debug;

use super::Source;
use crate::domain::Credential;
use crate::domain::SourceError;

/// Reads a colon separated credential file. Each non-blank line is one account and the
/// first field is its email.
pub struct CredentialFileReader<'a> {
    path: &'a Path,
}

impl fmt::Debug for CredentialFileReader<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CredentialFileReader [{}]", self.path.display())
    }
}

impl<'a> CredentialFileReader<'a> {
    pub fn new(path: &'a Path) -> Self {
        CredentialFileReader { path }
    }
}

impl Source for CredentialFileReader<'_> {
    fn read(&mut self) -> Result<Vec<Credential>, SourceError> {
        let file = File::open(self.path).map_err(|source| SourceError::Io {
            path: self.path.display().to_string(),
            source,
        })?;
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(false)
            .delimiter(b':')
            .flexible(true)
            .quoting(false)
            .from_reader(BufReader::new(file));

        let mut credentials = vec![];
        for record in rdr.records() {
            let record = record?;
            // the line is trimmed as a whole, inner fields keep their spaces
            let mut fields: Vec<&str> = record.iter().collect();
            if let Some(first) = fields.first_mut() {
                *first = str::trim_start(*first);
            }
            if let Some(last) = fields.last_mut() {
                *last = str::trim_end(*last);
            }
            if fields.len() == 1 && fields[0].is_empty() {
                continue;
            }
            let mut fields = fields.into_iter().map(str::to_string);
            let email = fields.next().unwrap_or_default();
            credentials.push(Credential::new(email, fields.collect()));
        }
        debug!(
            "Read {} credentials from {}",
            credentials.len(),
            self.path.display()
        );
        Ok(credentials)
    }
}
