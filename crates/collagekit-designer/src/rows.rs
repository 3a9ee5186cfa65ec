//! Row grouping of absolutely positioned items.
//!
//! A row is a connected component of the "vertical extents overlap" relation.
//! Overlap is not transitive (A may overlap B and B overlap C while A and C are
//! disjoint), so rows are built with a disjoint-set forest over all pairs rather
//! than by bucketing on y.

use std::cmp::Ordering;

use collagekit_core::{Item, Rect};

/// Disjoint-set forest with path halving and union by size.
#[derive(Debug, Clone)]
pub(crate) struct DisjointSet {
    parent: Vec<usize>,
    size: Vec<usize>,
}

impl DisjointSet {
    pub(crate) fn new(len: usize) -> Self {
        Self {
            parent: (0..len).collect(),
            size: vec![1; len],
        }
    }

    pub(crate) fn find(&mut self, mut i: usize) -> usize {
        while self.parent[i] != i {
            self.parent[i] = self.parent[self.parent[i]];
            i = self.parent[i];
        }
        i
    }

    pub(crate) fn union(&mut self, a: usize, b: usize) {
        let (ra, rb) = (self.find(a), self.find(b));
        if ra == rb {
            return;
        }
        let (big, small) = if self.size[ra] >= self.size[rb] {
            (ra, rb)
        } else {
            (rb, ra)
        };
        self.parent[small] = big;
        self.size[big] += self.size[small];
    }

    /// Members of each set, sets ordered by their smallest member.
    pub(crate) fn groups(&mut self) -> Vec<Vec<usize>> {
        let mut roots: Vec<usize> = Vec::new();
        let mut groups: Vec<Vec<usize>> = Vec::new();
        for i in 0..self.parent.len() {
            let root = self.find(i);
            match roots.iter().position(|r| *r == root) {
                Some(g) => groups[g].push(i),
                None => {
                    roots.push(root);
                    groups.push(vec![i]);
                }
            }
        }
        groups
    }
}

/// Partitions boxes into rows, returning index groups in input order.
pub(crate) fn row_partition(rects: &[Rect]) -> Vec<Vec<usize>> {
    let mut sets = DisjointSet::new(rects.len());
    for i in 0..rects.len() {
        for j in (i + 1)..rects.len() {
            if rects[i].overlaps_vertically(&rects[j]) {
                sets.union(i, j);
            }
        }
    }
    sets.groups()
}

/// Left-to-right order inside a row; ties fall back to y, then id.
pub(crate) fn item_order(a: &Item, b: &Item) -> Ordering {
    a.x.total_cmp(&b.x)
        .then(a.y.total_cmp(&b.y))
        .then_with(|| a.id.cmp(&b.id))
}

fn row_top(row: &[Item]) -> f64 {
    row.iter().map(|i| i.y).fold(f64::INFINITY, f64::min)
}

fn row_left(row: &[Item]) -> f64 {
    row.iter().map(|i| i.x).fold(f64::INFINITY, f64::min)
}

/// Top-to-bottom order of rows; ties fall back to the leftmost x, then the first id.
pub(crate) fn row_order(a: &[Item], b: &[Item]) -> Ordering {
    row_top(a)
        .total_cmp(&row_top(b))
        .then(row_left(a).total_cmp(&row_left(b)))
        .then_with(|| {
            let first = |row: &[Item]| row.first().map(|i| i.id.clone());
            first(a).cmp(&first(b))
        })
}

/// Groups items into rows of transitively overlapping vertical extents.
///
/// Rows are sorted top-to-bottom by their minimum y and items left-to-right by x.
/// The result does not depend on input order.
pub fn group_by_row(items: &[Item]) -> Vec<Vec<Item>> {
    let rects: Vec<Rect> = items.iter().map(Item::rect).collect();
    let mut rows: Vec<Vec<Item>> = row_partition(&rects)
        .into_iter()
        .map(|group| {
            let mut row: Vec<Item> = group.into_iter().map(|i| items[i].clone()).collect();
            row.sort_by(item_order);
            row
        })
        .collect();
    rows.sort_by(|a, b| row_order(a, b));
    rows
}

/// Ids of [`group_by_row`]'s result, for comparisons and logging.
pub fn row_ids(rows: &[Vec<Item>]) -> Vec<Vec<String>> {
    rows.iter()
        .map(|row| row.iter().map(|i| i.id.clone()).collect())
        .collect()
}
