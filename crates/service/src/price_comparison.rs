//! Per-cuisine price statistics over an in-memory slice of records.
//!
//! Pure: no store access, no side effects. The caller fetches (at most 100)
//! records first and hands them over.

use std::collections::btree_map::Entry;
use std::collections::BTreeMap;

use serde::Serialize;

use models::restaurant::{CuisineType, District, Restaurant};

/// A record reduced to what the comparison response shows.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PricePoint {
    pub name: String,
    pub price: u32,
    pub district: District,
}

/// Statistics for one aggregation group (all records sharing a cuisine type).
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CuisineStats {
    pub average_price: u32,
    pub restaurant_count: usize,
    pub cheapest: PricePoint,
    pub most_expensive: PricePoint,
}

struct Group {
    total: u64,
    count: usize,
    cheapest: PricePoint,
    most_expensive: PricePoint,
}

/// Group `restaurants` by cuisine type and compute per-group stats.
///
/// Returns `None` for an empty input: the caller renders that as a distinct
/// "nothing to compare" outcome rather than an empty mapping. The average
/// rounds to the nearest integer with ties to even. Cheapest/most-expensive
/// ties resolve to the record seen first in input order.
pub fn compare(restaurants: &[Restaurant]) -> Option<BTreeMap<CuisineType, CuisineStats>> {
    if restaurants.is_empty() {
        return None;
    }

    let mut groups: BTreeMap<CuisineType, Group> = BTreeMap::new();
    for r in restaurants {
        let point = PricePoint { name: r.name.clone(), price: r.average_price, district: r.district };
        match groups.entry(r.cuisine_type) {
            Entry::Vacant(slot) => {
                slot.insert(Group {
                    total: u64::from(point.price),
                    count: 1,
                    cheapest: point.clone(),
                    most_expensive: point,
                });
            }
            Entry::Occupied(mut slot) => {
                let group = slot.get_mut();
                group.total += u64::from(point.price);
                group.count += 1;
                // Strict comparisons keep the first-seen record on ties.
                if point.price < group.cheapest.price {
                    group.cheapest = point.clone();
                }
                if point.price > group.most_expensive.price {
                    group.most_expensive = point;
                }
            }
        }
    }

    let stats = groups
        .into_iter()
        .map(|(cuisine, group)| {
            let average = (group.total as f64 / group.count as f64).round_ties_even() as u32;
            (
                cuisine,
                CuisineStats {
                    average_price: average,
                    restaurant_count: group.count,
                    cheapest: group.cheapest,
                    most_expensive: group.most_expensive,
                },
            )
        })
        .collect();
    Some(stats)
}
