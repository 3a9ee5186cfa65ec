//! Cross-breakpoint reconciliation.
//!
//! The three breakpoints of a template are edited independently, but the host
//! renders them from one shared sequence of rows and hides, per breakpoint, the
//! items that breakpoint does not show. [`get_layout`] derives that sequence:
//!
//! 1. Group desktop, tablet and mobile into rows. Desktop is the baseline.
//! 2. Join: when a tablet or mobile row holds items from several desktop rows,
//!    those desktop rows (and everything between them) become one row.
//! 3. Split: a desktop row that tablet breaks apart is broken apart the same way.
//!    Only items tablet places are compared, so hiding items on tablet or mobile
//!    never splits a row.
//! 4. Fold: tablet-only and mobile-only items join the row of a placed item they
//!    share a row with, or become a new row positioned by their own breakpoint's
//!    neighbouring rows. With no neighbour at all the new row goes first.

use std::collections::HashMap;

use serde::Serialize;
use tracing::debug;

use collagekit_core::{Breakpoint, Item, Template};

use crate::rows::{group_by_row, row_order};

/// One item of the unified row plan, with the breakpoints that display it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlacedItem {
    pub item: Item,
    pub visible_on: Vec<Breakpoint>,
}

/// Maps each item id to the index of the row holding it.
fn row_index(rows: &[Vec<Item>]) -> HashMap<&str, usize> {
    rows.iter()
        .enumerate()
        .flat_map(|(r, row)| row.iter().map(move |i| (i.id.as_str(), r)))
        .collect()
}

/// Inclusive desktop row ranges that some foreign row spans, merged where they
/// overlap or touch.
fn joins(desktop: &HashMap<&str, usize>, foreign: &[&[Vec<Item>]]) -> Vec<(usize, usize)> {
    let mut ranges: Vec<(usize, usize)> = Vec::new();
    for rows in foreign {
        for row in rows.iter() {
            let hits = row.iter().filter_map(|i| desktop.get(i.id.as_str()).copied());
            let span = hits.fold(None, |acc: Option<(usize, usize)>, r| match acc {
                None => Some((r, r)),
                Some((lo, hi)) => Some((lo.min(r), hi.max(r))),
            });
            if let Some((lo, hi)) = span {
                if lo < hi {
                    ranges.push((lo, hi));
                }
            }
        }
    }
    ranges.sort_unstable();

    let mut merged: Vec<(usize, usize)> = Vec::new();
    for (lo, hi) in ranges {
        match merged.last_mut() {
            Some(last) if lo <= last.1 + 1 => last.1 = last.1.max(hi),
            _ => merged.push((lo, hi)),
        }
    }
    merged
}

/// A desktop row, or several flattened desktop rows when `joined`.
struct Band {
    items: Vec<Item>,
    joined: bool,
}

fn bands(desktop: Vec<Vec<Item>>, joins: &[(usize, usize)]) -> Vec<Band> {
    let mut out: Vec<Band> = Vec::new();
    let mut pending = joins.iter().peekable();
    let mut flattened: Vec<Item> = Vec::new();

    for (r, row) in desktop.into_iter().enumerate() {
        while pending.peek().is_some_and(|range| range.1 < r) {
            pending.next();
        }
        match pending.peek() {
            Some(range) if range.0 <= r => {
                flattened.extend(row);
                if r == range.1 {
                    out.push(Band {
                        items: std::mem::take(&mut flattened),
                        joined: true,
                    });
                }
            }
            _ => out.push(Band {
                items: row,
                joined: false,
            }),
        }
    }
    out.sort_by(|a, b| row_order(&a.items, &b.items));
    out
}

/// Splits a desktop row along tablet's rows.
///
/// Only items tablet places take part, and only when it places at least two of
/// them. An item tablet does not place stays with its left neighbour (leading
/// ones with the first placed item). Mobile never splits: it stacks most rows,
/// and its grouping reaches the plan through joins only.
fn split(row: Vec<Item>, tablet: &HashMap<&str, usize>) -> Vec<Vec<Item>> {
    let t: Vec<Option<usize>> = row.iter().map(|i| tablet.get(i.id.as_str()).copied()).collect();
    if t.iter().flatten().count() < 2 {
        return vec![row];
    }

    // (tablet row, item indices)
    let mut groups: Vec<(usize, Vec<usize>)> = Vec::new();
    let mut leading: Vec<usize> = Vec::new();
    let mut current: Option<usize> = None;
    for (i, placed) in t.iter().enumerate() {
        let k = match placed {
            Some(r) => match groups.iter().position(|(gr, _)| gr == r) {
                Some(k) => k,
                None => {
                    groups.push((*r, Vec::new()));
                    groups.len() - 1
                }
            },
            None => match current {
                Some(k) => k,
                None => {
                    leading.push(i);
                    continue;
                }
            },
        };
        groups[k].1.push(i);
        current = Some(k);
    }
    if groups.len() == 1 {
        return vec![row];
    }
    if let Some((_, first)) = groups.first_mut() {
        first.extend(leading);
        first.sort_unstable();
    }
    groups.sort_by_key(|(r, _)| *r);

    debug!(
        items = row.len(),
        rows = groups.len(),
        "split desktop row along tablet rows"
    );
    groups
        .into_iter()
        .map(|(_, g)| g.into_iter().map(|i| row[i].clone()).collect())
        .collect()
}

fn canonical_row(canonical: &[Vec<String>], id: &str) -> Option<usize> {
    canonical.iter().position(|row| row.iter().any(|i| i == id))
}

/// Adds the rows of one foreign breakpoint that hold items not yet placed.
fn fold(canonical: &mut Vec<Vec<String>>, foreign: &[Vec<Item>], breakpoint: Breakpoint) {
    for (k, row) in foreign.iter().enumerate() {
        let newcomers: Vec<String> = row
            .iter()
            .filter(|i| canonical_row(canonical, &i.id).is_none())
            .map(|i| i.id.clone())
            .collect();
        if newcomers.is_empty() {
            continue;
        }

        if let Some(target) = row.iter().find_map(|i| canonical_row(canonical, &i.id)) {
            debug!(%breakpoint, target, count = newcomers.len(), "joining placed row");
            canonical[target].extend(newcomers);
            continue;
        }

        let placed = |r: &Vec<Item>| -> Vec<usize> {
            r.iter()
                .filter_map(|i| canonical_row(canonical, &i.id))
                .collect()
        };
        let after = foreign[..k]
            .iter()
            .rev()
            .map(placed)
            .find(|rows| !rows.is_empty())
            .and_then(|rows| rows.into_iter().max())
            .map(|r| r + 1);
        let before = || {
            foreign[k + 1..]
                .iter()
                .map(placed)
                .find(|rows| !rows.is_empty())
                .and_then(|rows| rows.into_iter().min())
        };
        let at = match after.or_else(before) {
            Some(at) => at,
            None => {
                debug!(%breakpoint, "no placed neighbour, inserting first");
                0
            }
        };
        debug!(%breakpoint, at, count = newcomers.len(), "inserting row");
        canonical.insert(at, newcomers);
    }
}

/// Unified row order for the three breakpoints of `template`.
///
/// Each returned item is the desktop record when desktop places it, otherwise
/// the record of the first breakpoint that does.
pub fn get_layout(template: &Template) -> Vec<Vec<Item>> {
    let desktop = group_by_row(&template.desktop.items);
    let tablet = group_by_row(&template.tablet.items);
    let mobile = group_by_row(&template.mobile.items);

    let desktop_rows = row_index(&desktop);
    let tablet_rows = row_index(&tablet);

    let joined = joins(&desktop_rows, &[tablet.as_slice(), mobile.as_slice()]);
    if !joined.is_empty() {
        debug!(?joined, "joining desktop rows");
    }

    let mut records: HashMap<String, Item> = HashMap::new();
    for item in template
        .desktop
        .items
        .iter()
        .chain(&template.tablet.items)
        .chain(&template.mobile.items)
    {
        records.entry(item.id.clone()).or_insert_with(|| item.clone());
    }

    let mut canonical: Vec<Vec<String>> = Vec::new();
    for band in bands(desktop.clone(), &joined) {
        let rows = if band.joined {
            vec![band.items]
        } else {
            split(band.items, &tablet_rows)
        };
        canonical.extend(
            rows.into_iter()
                .map(|row| row.into_iter().map(|i| i.id).collect::<Vec<_>>()),
        );
    }

    fold(&mut canonical, &tablet, Breakpoint::Tablet);
    fold(&mut canonical, &mobile, Breakpoint::Mobile);

    debug!(
        desktop = desktop.len(),
        tablet = tablet.len(),
        mobile = mobile.len(),
        unified = canonical.len(),
        "reconciled layout"
    );

    canonical
        .into_iter()
        .map(|row| {
            row.into_iter()
                .filter_map(|id| records.get(&id).cloned())
                .collect()
        })
        .collect()
}

/// Annotates each item of `rows` with the breakpoints of `template` that place it.
pub fn row_visibility(template: &Template, rows: &[Vec<Item>]) -> Vec<Vec<PlacedItem>> {
    rows.iter()
        .map(|row| {
            row.iter()
                .map(|item| PlacedItem {
                    item: item.clone(),
                    visible_on: template.breakpoints_of(&item.id),
                })
                .collect()
        })
        .collect()
}

/// [`get_layout`] followed by [`row_visibility`].
pub fn plan_rows(template: &Template) -> Vec<Vec<PlacedItem>> {
    row_visibility(template, &get_layout(template))
}
