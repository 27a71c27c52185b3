//! Column and row names: replacing tables, auto-generating names for new
//! entries and resolving names to indices.
//!
//! Names are all-or-nothing. A table is either empty or holds one name per
//! entry; auto-naming only ever extends a complete table. The hash tables
//! are caches formed on first lookup and dropped whenever they may be stale.

use tracing::{debug, warn};

use crate::model::LpModel;
use crate::model::error::ModelError;
use crate::name_hash::{NameEntry, NameHash};

/// Prefix of auto-generated column names.
pub const COL_NAME_PREFIX: &str = "col_ekk_";
/// Prefix of auto-generated row names.
pub const ROW_NAME_PREFIX: &str = "row_ekk_";

impl LpModel {
    pub fn col_names(&self) -> &[String] {
        &self.col_names
    }

    pub fn row_names(&self) -> &[String] {
        &self.row_names
    }

    /// Next suffix used for an auto-generated column name.
    pub fn col_name_counter(&self) -> usize {
        self.new_col_name_ix
    }

    /// Next suffix used for an auto-generated row name.
    pub fn row_name_counter(&self) -> usize {
        self.new_row_name_ix
    }

    /// Replace the column names. `names` must be empty or hold `num_col` names.
    pub fn set_col_names(&mut self, names: Vec<String>) -> Result<(), ModelError> {
        check_name_count(self.num_col, names.len())?;
        self.col_names = names;
        self.col_hash.clear();
        Ok(())
    }

    /// Replace the row names. `names` must be empty or hold `num_row` names.
    pub fn set_row_names(&mut self, names: Vec<String>) -> Result<(), ModelError> {
        check_name_count(self.num_row, names.len())?;
        self.row_names = names;
        self.row_hash.clear();
        Ok(())
    }

    /// Generate names for `num_new_col` columns about to be appended.
    ///
    /// Called before `num_col` grows. Nothing happens when the model has no
    /// columns or its column names are incomplete. Stops at the first
    /// generated name that is already taken, or at a slot that is neither
    /// next in line nor blank, and drops the column hash.
    pub fn add_col_names(&mut self, num_new_col: usize) {
        add_names(
            NameTable {
                names: &mut self.col_names,
                hash: &mut self.col_hash,
                counter: &mut self.new_col_name_ix,
                prefix: COL_NAME_PREFIX,
                kind: "col",
            },
            self.num_col,
            num_new_col,
        );
    }

    /// Row counterpart of [`LpModel::add_col_names`].
    pub fn add_row_names(&mut self, num_new_row: usize) {
        add_names(
            NameTable {
                names: &mut self.row_names,
                hash: &mut self.row_hash,
                counter: &mut self.new_row_name_ix,
                prefix: ROW_NAME_PREFIX,
                kind: "row",
            },
            self.num_row,
            num_new_row,
        );
    }

    /// Resolve a column name, forming the hash first if needed.
    pub fn col_index_by_name(&mut self, name: &str) -> Result<usize, ModelError> {
        resolve(&self.col_names, &mut self.col_hash, name)
    }

    /// Resolve a row name, forming the hash first if needed.
    pub fn row_index_by_name(&mut self, name: &str) -> Result<usize, ModelError> {
        resolve(&self.row_names, &mut self.row_hash, name)
    }

    /// True if any column name repeats. Drops the column hash.
    pub fn has_duplicate_col_names(&mut self) -> bool {
        self.col_hash.has_duplicate(&self.col_names)
    }

    /// True if any row name repeats. Drops the row hash.
    pub fn has_duplicate_row_names(&mut self) -> bool {
        self.row_hash.has_duplicate(&self.row_names)
    }
}

struct NameTable<'a> {
    names: &'a mut Vec<String>,
    hash: &'a mut NameHash,
    counter: &'a mut usize,
    prefix: &'static str,
    kind: &'static str,
}

fn check_name_count(expected: usize, got: usize) -> Result<(), ModelError> {
    if got == 0 || got == expected {
        Ok(())
    } else {
        Err(ModelError::NameCountMismatch { expected, got })
    }
}

fn add_names(table: NameTable<'_>, num: usize, num_new: usize) {
    let NameTable {
        names,
        hash,
        counter,
        prefix,
        kind,
    } = table;

    if num == 0 || names.len() < num {
        return;
    }
    if hash.is_empty() {
        hash.form(names);
    }
    for index in num..num + num_new {
        let name = format!("{prefix}{counter}");
        *counter += 1;

        let mut added = false;
        if !hash.contains(&name) {
            if names.len() == index {
                names.push(name.clone());
                added = true;
            } else if names.len() > index && names[index].is_empty() {
                names[index] = name.clone();
                added = true;
            }
        }
        if !added {
            hash.clear();
            warn!(
                component = "lp",
                operation = "add_names",
                status = "failed",
                kind,
                index,
                name = name.as_str(),
                "Could not add generated name; dropped name hash"
            );
            return;
        }

        let inserted = hash.insert_unique(&name, index);
        debug_assert!(inserted);
        debug_assert_eq!(names[index], name);
        debug_assert_eq!(hash.get(&name), Some(NameEntry::Index(index)));
    }
    debug!(
        component = "lp",
        operation = "add_names",
        status = "success",
        kind,
        num_new,
        counter = *counter,
        "Generated names"
    );
}

fn resolve(names: &[String], hash: &mut NameHash, name: &str) -> Result<usize, ModelError> {
    if hash.is_empty() {
        hash.form(names);
    }
    match hash.get(name) {
        Some(NameEntry::Index(index)) => Ok(index),
        Some(NameEntry::Duplicate) => Err(ModelError::DuplicateName(name.to_string())),
        None => Err(ModelError::NameNotFound(name.to_string())),
    }
}
