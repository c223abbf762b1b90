//! Scratch space shared by the parser's productions.
//!
//! While a parse is in flight, decoded string content, pending array
//! elements, and pending object members accumulate here instead of being
//! allocated per element. Each stack works mark/rewind style: a production
//! records the top on entry, pushes as it goes, and either takes everything
//! above its mark into owned storage (success) or rewinds back to the mark
//! (failure), dropping whatever it had pushed. At the end of a parse all
//! three stacks are empty again.

use alloc::string::String;
use alloc::vec::Vec;

use crate::value::{Member, Value};

/// Initial capacity of the text stack, and the floor for its growth.
const TEXT_INIT_CAPACITY: usize = 256;

#[derive(Debug, Default)]
pub(crate) struct Scratch {
    text: String,
    values: Vec<Value>,
    members: Vec<Member>,
}

impl Scratch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty() && self.values.is_empty() && self.members.is_empty()
    }

    pub fn text_mark(&self) -> usize {
        self.text.len()
    }

    pub fn push_char(&mut self, ch: char) {
        self.grow_text(ch.len_utf8());
        self.text.push(ch);
    }

    pub fn push_str(&mut self, content: &str) {
        self.grow_text(content.len());
        self.text.push_str(content);
    }

    /// Pops everything above `mark` into an owned string.
    ///
    /// `mark` must lie on a character boundary; the parser only marks
    /// between complete pushes, so it always does.
    pub fn take_text(&mut self, mark: usize) -> String {
        if mark == 0 {
            core::mem::take(&mut self.text)
        } else {
            self.text.split_off(mark)
        }
    }

    pub fn rewind_text(&mut self, mark: usize) {
        self.text.truncate(mark);
    }

    /// Grows the text stack by a quarter of its capacity at a time, from a
    /// floor of [`TEXT_INIT_CAPACITY`].
    fn grow_text(&mut self, additional: usize) {
        let needed = self.text.len() + additional;
        if needed <= self.text.capacity() {
            return;
        }
        let mut capacity = self.text.capacity().max(TEXT_INIT_CAPACITY);
        while capacity < needed {
            capacity += capacity >> 2;
        }
        self.text.reserve_exact(capacity - self.text.len());
    }

    pub fn values_mark(&self) -> usize {
        self.values.len()
    }

    pub fn push_value(&mut self, value: Value) {
        self.values.push(value);
    }

    /// Pops everything above `mark` into an owned element block.
    pub fn take_values(&mut self, mark: usize) -> Vec<Value> {
        self.values.split_off(mark)
    }

    pub fn rewind_values(&mut self, mark: usize) {
        self.values.truncate(mark);
    }

    pub fn members_mark(&self) -> usize {
        self.members.len()
    }

    pub fn push_member(&mut self, member: Member) {
        self.members.push(member);
    }

    /// Pops everything above `mark` into an owned member block.
    pub fn take_members(&mut self, mark: usize) -> Vec<Member> {
        self.members.split_off(mark)
    }

    pub fn rewind_members(&mut self, mark: usize) {
        self.members.truncate(mark);
    }
}
