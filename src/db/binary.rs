/*!
An index of binary clauses.

Each literal is paired with the set of binary clauses containing the literal, with each clause represented by the other literal of the clause (the 'partner') and the key of the clause.
So, a binary clause *l* ∨ *m* with key *k* occupies two entries: (*m*, *k*) for *l*, and (*l*, *k*) for *m*.

If *l* is false then *m* must be true, and so the entries of the negation of a literal are exactly the implications of the literal.

```rust
# use lookahead_sat::db::binary::BinaryIndex;
let mut index = BinaryIndex::new(3);
index.insert(1, -3, 7);

assert!(index.partners(1).contains(&(-3, 7)));
assert!(index.partners(-3).contains(&(1, 7)));

index.remove(1, -3, 7);
assert!(index.partners(1).is_empty());
assert!(index.partners(-3).is_empty());
```
*/

use std::collections::BTreeSet;

use crate::{
    db::ClauseKey,
    structures::{
        atom::Atom,
        literal::{literal_slots, CLiteral, Literal},
    },
};

/// A binary clause as seen from one of its literals.
pub type BinaryEntry = (CLiteral, ClauseKey);

/// The binary index.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BinaryIndex {
    /// Entries for each literal, indexed by [Literal::index].
    entries: Vec<BTreeSet<BinaryEntry>>,
}

impl BinaryIndex {
    /// An empty index for `atom_count` atoms.
    pub fn new(atom_count: Atom) -> Self {
        BinaryIndex {
            entries: vec![BTreeSet::default(); literal_slots(atom_count)],
        }
    }

    /// Inserts the binary clause `a` ∨ `b` with the given key.
    pub fn insert(&mut self, a: CLiteral, b: CLiteral, key: ClauseKey) {
        self.entries[a.index()].insert((b, key));
        self.entries[b.index()].insert((a, key));
    }

    /// Removes the binary clause `a` ∨ `b` with the given key.
    pub fn remove(&mut self, a: CLiteral, b: CLiteral, key: ClauseKey) {
        self.entries[a.index()].remove(&(b, key));
        self.entries[b.index()].remove(&(a, key));
    }

    /// The entries of binary clauses containing `literal`.
    pub fn partners(&self, literal: CLiteral) -> &BTreeSet<BinaryEntry> {
        &self.entries[literal.index()]
    }

    /// A count of binary clauses containing `literal`.
    pub fn count(&self, literal: CLiteral) -> usize {
        self.entries[literal.index()].len()
    }

    /// The keys of every binary clause in the index.
    pub fn keys(&self) -> BTreeSet<ClauseKey> {
        self.entries
            .iter()
            .flat_map(|entries| entries.iter().map(|(_, key)| *key))
            .collect()
    }
}
