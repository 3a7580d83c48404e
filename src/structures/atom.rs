/*!
(The internal representation of) an atom (aka. a 'variable').

Each atom is a u32 *u* such that *u* is at least 1, and the atoms of a formula form a contiguous block [1..=*m*] for some *m*.
The atom `0` is never part of a formula, though slot `0` of any atom indexed structure exists to keep indexing direct.

```rust
# use lookahead_sat::structures::atom::Atom;
let m = 97;
let atoms = (1..=m).collect::<Vec<Atom>>();
assert_eq!(atoms.len(), 97);
```

This representation allows atoms to be used as the indicies of a structure without taking too much space.

# Notes
- Atoms read from a DIMACS file are used as given, so the atom `5` of the file is the atom `5` of the context.
- In the SAT literature these are often called 'variables' while in the logic literature these are often called 'atoms'.
*/

/// An atom, aka. a 'variable'.
pub type Atom = u32;

/// The maximum instance of an atom, limited by the representation of literals as signed integers.
pub const ATOM_MAX: Atom = i32::MAX.unsigned_abs();
