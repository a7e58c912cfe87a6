use crate::{stmt::Value, Error, Result};

/// The single flat array returned by executing a batch.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct FlatResults {
    pub entries: Vec<ResultEntry>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResultEntry {
    pub column: String,
    pub value: Value,
}

/// Consumes a [`FlatResults`] positionally.
#[derive(Debug)]
pub struct ResultCursor<'a> {
    entries: &'a [ResultEntry],
    pos: usize,
}

impl FlatResults {
    pub fn new() -> FlatResults {
        FlatResults::default()
    }

    pub fn push(&mut self, column: impl Into<String>, value: impl Into<Value>) {
        self.entries.push(ResultEntry {
            column: column.into(),
            value: value.into(),
        });
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn cursor(&self) -> ResultCursor<'_> {
        ResultCursor {
            entries: &self.entries,
            pos: 0,
        }
    }
}

impl ResultCursor<'_> {
    /// Takes the next slot, which must carry `column`.
    pub fn next(&mut self, column: &str) -> Result<Value> {
        let Some(entry) = self.entries.get(self.pos) else {
            return Err(Error::invalid_result(format!(
                "result stream exhausted at slot {} while reading column `{column}`",
                self.pos
            )));
        };

        if entry.column != column {
            return Err(Error::invalid_result(format!(
                "slot {} holds column `{}`, expected `{column}`",
                self.pos, entry.column
            )));
        }

        self.pos += 1;
        Ok(entry.value.clone())
    }

    /// Number of slots consumed so far.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Succeeds only if every slot was consumed.
    pub fn finish(self) -> Result<()> {
        if self.pos == self.entries.len() {
            Ok(())
        } else {
            Err(Error::invalid_result(format!(
                "{} trailing result slot(s) after reading every operation",
                self.entries.len() - self.pos
            )))
        }
    }
}
