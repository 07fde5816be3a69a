use crate::{ChunkList, Error};

/// A detached, fail-fast positional cursor over a [`ChunkList`].
///
/// A `Cursor` does not borrow the list; every operation takes the list as
/// an argument. That keeps the list free to be mutated between cursor
/// operations, and the cursor *detects* such mutations instead of
/// preventing them: it snapshots the list's generation counter when
/// created, and any structural change it did not perform itself makes its
/// next operation report [`Error::Invalidated`]. Mutations made through
/// the cursor re-synchronize the snapshot. Replacing an element with
/// [`ChunkList::set`] or [`Cursor::set`] is not a structural change.
///
/// The cursor always sits between two elements. [`next`](Cursor::next) and
/// [`previous`](Cursor::previous) move it and return the element crossed,
/// which becomes the target of a following [`remove`](Cursor::remove) or
/// [`set`](Cursor::set).
///
/// # Example
///
/// ```
/// use chunk_list::{ChunkList, Error};
///
/// let mut list = ChunkList::from([1, 2, 3]);
/// let mut cursor = list.cursor();
///
/// assert_eq!(cursor.next(&list), Ok(&1));
/// assert_eq!(cursor.remove(&mut list), Ok(1));
/// assert_eq!(cursor.next(&list), Ok(&2));
///
/// // A mutation behind the cursor's back is detected.
/// list.push_back(4);
/// assert_eq!(cursor.next(&list), Err(Error::Invalidated));
/// ```
#[derive(Debug, Clone)]
pub struct Cursor {
    position: usize,
    last_returned: Option<usize>,
    generation: u64,
}

impl Cursor {
    pub(crate) fn new(position: usize, generation: u64) -> Self {
        Cursor {
            position,
            last_returned: None,
            generation,
        }
    }

    /// The index of the element a [`next`](Cursor::next) call would return.
    pub fn next_index(&self) -> usize {
        self.position
    }

    /// The index of the element a [`previous`](Cursor::previous) call would
    /// return, or `None` at the front of the list.
    pub fn previous_index(&self) -> Option<usize> {
        self.position.checked_sub(1)
    }

    /// Returns `true` if an element remains ahead of the cursor.
    pub fn has_next<T>(&self, list: &ChunkList<T>) -> bool {
        self.position != list.len()
    }

    /// Returns `true` if an element remains behind the cursor.
    pub fn has_previous(&self) -> bool {
        self.position != 0
    }

    /// Returns the element ahead of the cursor and steps over it.
    ///
    /// # Errors
    ///
    /// [`Error::Invalidated`] if the list was structurally modified behind
    /// this cursor, [`Error::Exhausted`] past the end of the list.
    pub fn next<'a, T>(&mut self, list: &'a ChunkList<T>) -> Result<&'a T, Error> {
        self.check(list)?;
        if self.position >= list.len() {
            return Err(Error::Exhausted);
        }
        let value = list.get(self.position).ok_or(Error::Invalidated)?;
        self.last_returned = Some(self.position);
        self.position += 1;
        Ok(value)
    }

    /// Returns the element behind the cursor and steps back over it.
    ///
    /// # Errors
    ///
    /// [`Error::Invalidated`] if the list was structurally modified behind
    /// this cursor, [`Error::Exhausted`] past the front of the list.
    pub fn previous<'a, T>(&mut self, list: &'a ChunkList<T>) -> Result<&'a T, Error> {
        self.check(list)?;
        let index = self.position.checked_sub(1).ok_or(Error::Exhausted)?;
        let value = list.get(index).ok_or(Error::Invalidated)?;
        self.position = index;
        self.last_returned = Some(index);
        Ok(value)
    }

    /// Removes the element returned by the latest `next`/`previous` call.
    ///
    /// The cursor moves to sit where the removed element was and stays
    /// valid: its snapshot is re-synchronized after the removal.
    ///
    /// # Errors
    ///
    /// [`Error::NoCurrent`] without a pending element,
    /// [`Error::Invalidated`] on a stale snapshot.
    pub fn remove<T>(&mut self, list: &mut ChunkList<T>) -> Result<T, Error> {
        let index = self.last_returned.ok_or(Error::NoCurrent)?;
        self.check(list)?;
        let value = list.remove_at(index).ok_or(Error::Invalidated)?;
        self.position = index;
        self.last_returned = None;
        self.generation = list.generation();
        Ok(value)
    }

    /// Replaces the element returned by the latest `next`/`previous` call,
    /// returning the old value.
    ///
    /// Replacement is not a structural change, so neither this cursor nor
    /// any other is invalidated by it.
    ///
    /// # Errors
    ///
    /// [`Error::NoCurrent`] without a pending element,
    /// [`Error::Invalidated`] on a stale snapshot.
    pub fn set<T>(&mut self, list: &mut ChunkList<T>, value: T) -> Result<T, Error> {
        let index = self.last_returned.ok_or(Error::NoCurrent)?;
        self.check(list)?;
        list.set(index, value).ok_or(Error::Invalidated)
    }

    /// Inserts an element at the cursor position and steps over it, so a
    /// following [`next`](Cursor::next) returns the element that was ahead
    /// before the insert.
    ///
    /// Clears the pending element and re-synchronizes the snapshot.
    ///
    /// # Errors
    ///
    /// [`Error::Invalidated`] on a stale snapshot; an insert the list
    /// cannot place is reported the same way.
    pub fn insert<T>(&mut self, list: &mut ChunkList<T>, value: T) -> Result<(), Error> {
        self.check(list)?;
        list.insert(self.position, value)
            .map_err(|_| Error::Invalidated)?;
        self.position += 1;
        self.last_returned = None;
        self.generation = list.generation();
        Ok(())
    }

    /// Feeds every element ahead of the cursor to `f`, leaving the cursor
    /// at the end of the list.
    ///
    /// # Errors
    ///
    /// [`Error::Invalidated`] if the list was structurally modified behind
    /// this cursor.
    pub fn for_each_remaining<'a, T, F>(
        &mut self,
        list: &'a ChunkList<T>,
        mut f: F,
    ) -> Result<(), Error>
    where
        F: FnMut(&'a T),
    {
        while self.has_next(list) {
            f(self.next(list)?);
        }
        Ok(())
    }

    fn check<T>(&self, list: &ChunkList<T>) -> Result<(), Error> {
        if self.generation != list.generation() {
            return Err(Error::Invalidated);
        }
        Ok(())
    }
}
