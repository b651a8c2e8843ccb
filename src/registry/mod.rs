//! Partitioned file registry.
//!
//! Every mock file lives in exactly one of three partitions (clean, suspect,
//! quarantine). A name index maps each file name to its owning partition and
//! is updated in the same call as the partition it describes, so a name can
//! never be present twice or go missing from the index.

use crate::core::error::{Error, Result};
use crate::core::types::{FileRecord, Partition};
use std::collections::{HashMap, VecDeque};

/// The three file partitions plus the name index.
#[derive(Debug, Default, Clone)]
pub struct FileRegistry {
    clean: VecDeque<FileRecord>,
    suspect: VecDeque<FileRecord>,
    quarantine: VecDeque<FileRecord>,
    index: HashMap<String, Partition>,
}

impl FileRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    fn partition(&self, partition: Partition) -> &VecDeque<FileRecord> {
        match partition {
            Partition::Clean => &self.clean,
            Partition::Suspect => &self.suspect,
            Partition::Quarantine => &self.quarantine,
        }
    }

    fn partition_mut(&mut self, partition: Partition) -> &mut VecDeque<FileRecord> {
        match partition {
            Partition::Clean => &mut self.clean,
            Partition::Suspect => &mut self.suspect,
            Partition::Quarantine => &mut self.quarantine,
        }
    }

    /// Create a new, unflagged record at the front of the clean partition.
    pub fn load(&mut self, name: &str, size: u64) -> Result<&FileRecord> {
        if self.contains(name) {
            return Err(Error::DuplicateFile(name.to_string()));
        }

        self.index.insert(name.to_string(), Partition::Clean);
        self.clean.push_front(FileRecord::new(name, size));
        Ok(&self.clean[0])
    }

    /// Find a file in any partition.
    pub fn find(&self, name: &str) -> Result<(Partition, &FileRecord)> {
        let partition = *self
            .index
            .get(name)
            .ok_or_else(|| Error::file_not_found(name))?;
        let record = self.find_in(partition, name)?;
        Ok((partition, record))
    }

    /// Find a file in one partition.
    pub fn find_in(&self, partition: Partition, name: &str) -> Result<&FileRecord> {
        self.partition(partition)
            .iter()
            .find(|r| r.name == name)
            .ok_or_else(|| Error::file_not_found_in(name, partition))
    }

    /// Which partition owns `name`, if any.
    pub fn locate(&self, name: &str) -> Option<Partition> {
        self.index.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Move a file from one partition to the front of another.
    ///
    /// `on_arrival` runs on the record after it leaves `from` and before it
    /// is inserted into `to`; nothing in between can fail.
    pub fn move_with<F>(
        &mut self,
        name: &str,
        from: Partition,
        to: Partition,
        on_arrival: F,
    ) -> Result<&FileRecord>
    where
        F: FnOnce(&mut FileRecord),
    {
        let source = self.partition_mut(from);
        let position = source
            .iter()
            .position(|r| r.name == name)
            .ok_or_else(|| Error::file_not_found_in(name, from))?;
        let mut record = source
            .remove(position)
            .ok_or_else(|| Error::file_not_found_in(name, from))?;

        on_arrival(&mut record);
        self.index.insert(record.name.clone(), to);

        let dest = self.partition_mut(to);
        dest.push_front(record);
        log::trace!("Moved '{}' from {} to {}", name, from, to);
        Ok(&dest[0])
    }

    /// Move a file between partitions without touching its flag.
    pub fn move_file(&mut self, name: &str, from: Partition, to: Partition) -> Result<&FileRecord> {
        self.move_with(name, from, to, |_| {})
    }

    /// Move every record of `from` accepted by `select` to `to`.
    ///
    /// `select` sees each record of `from` exactly once, in display order,
    /// before anything is moved. Selected records are then passed to
    /// `on_arrival` and pushed to the front of `to` in that same order.
    /// Returns how many records moved.
    pub fn move_where<P, F>(
        &mut self,
        from: Partition,
        to: Partition,
        mut select: P,
        mut on_arrival: F,
    ) -> usize
    where
        P: FnMut(&FileRecord) -> bool,
        F: FnMut(&mut FileRecord),
    {
        let source = std::mem::take(self.partition_mut(from));
        let (selected, kept): (VecDeque<FileRecord>, VecDeque<FileRecord>) =
            source.into_iter().partition(|r| select(r));
        *self.partition_mut(from) = kept;

        let moved = selected.len();
        for mut record in selected {
            on_arrival(&mut record);
            self.index.insert(record.name.clone(), to);
            self.partition_mut(to).push_front(record);
        }
        log::trace!("Moved {} record(s) from {} to {}", moved, from, to);
        moved
    }

    /// Records of a partition in display order (most recently inserted first).
    pub fn files(&self, partition: Partition) -> impl Iterator<Item = &FileRecord> {
        self.partition(partition).iter()
    }

    /// Names in a partition, display order.
    pub fn names(&self, partition: Partition) -> Vec<String> {
        self.files(partition).map(|r| r.name.clone()).collect()
    }

    /// Number of records in a partition.
    pub fn count(&self, partition: Partition) -> usize {
        self.partition(partition).len()
    }

    /// Sum of record sizes in a partition, saturating at `u64::MAX`.
    pub fn total_bytes(&self, partition: Partition) -> u64 {
        self.partition(partition)
            .iter()
            .fold(0u64, |acc, r| acc.saturating_add(r.size))
    }

    /// Total number of tracked files.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Empty all partitions, returning how many records were dropped.
    pub fn clear_all(&mut self) -> usize {
        let removed = self.index.len();
        self.clean.clear();
        self.suspect.clear();
        self.quarantine.clear();
        self.index.clear();
        removed
    }
}
