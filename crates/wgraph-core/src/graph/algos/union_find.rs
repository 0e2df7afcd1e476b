//! Disjoint-set (union-find) over vertex indices
//!
//! Each slot is either the root of a tree, carrying the tree's size, or a
//! child pointing at its parent. Union attaches the smaller tree under the
//! larger root; find compresses the walked path onto the root.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Slot {
    Root { size: usize },
    Child { parent: usize },
}

#[derive(Debug, Clone)]
pub struct DisjointSet {
    slots: Vec<Slot>,
    sets: usize,
}

impl DisjointSet {
    /// `n` singleton sets, one per index in `0..n`
    pub fn new(n: usize) -> Self {
        Self {
            slots: vec![Slot::Root { size: 1 }; n],
            sets: n,
        }
    }

    /// Number of disjoint sets remaining
    pub fn set_count(&self) -> usize {
        self.sets
    }

    /// Representative of the set containing `node`
    pub fn find(&mut self, node: usize) -> usize {
        let mut root = node;
        while let Slot::Child { parent } = self.slots[root] {
            root = parent;
        }

        let mut current = node;
        while let Slot::Child { parent } = self.slots[current] {
            self.slots[current] = Slot::Child { parent: root };
            current = parent;
        }

        root
    }

    /// Size of the set containing `node`
    pub fn size_of(&mut self, node: usize) -> usize {
        let root = self.find(node);
        match self.slots[root] {
            Slot::Root { size } => size,
            Slot::Child { .. } => unreachable!("find returns a root"),
        }
    }

    /// Merge the sets containing `left` and `right`
    ///
    /// Returns `false` when both already share a root.
    pub fn union(&mut self, left: usize, right: usize) -> bool {
        let left = self.find(left);
        let right = self.find(right);
        if left == right {
            return false;
        }

        let (Slot::Root { size: left_size }, Slot::Root { size: right_size }) =
            (self.slots[left], self.slots[right])
        else {
            unreachable!("find returns a root");
        };

        let (big, small) = if left_size < right_size {
            (right, left)
        } else {
            (left, right)
        };
        self.slots[small] = Slot::Child { parent: big };
        self.slots[big] = Slot::Root {
            size: left_size + right_size,
        };
        self.sets -= 1;
        true
    }
}
