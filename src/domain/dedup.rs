use std::collections::{HashMap, HashSet};

use itertools::Itertools;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;

use crate::domain::Lead;

/// Name similarity above this merges two leads; the bar is high because
/// "Acme" vs "Acme Corporation" must merge after suffix stripping while
/// unrelated similarly-named companies must not. Strictly greater-than.
const NAME_SIMILARITY_THRESHOLD: f64 = 90.0;

static LEGAL_SUFFIX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i),?\s*(inc|ltd|llc|corp|corporation|gmbh|ag|bv|sa|sas|sarl)\.?$")
        .expect("legal suffix pattern is valid")
});

/// Lowercases a company name and strips one trailing legal-entity
/// suffix, with an optional leading comma and trailing period. Suffixes
/// anywhere else in the name are left alone.
pub fn normalize_name(name: &str) -> String {
    LEGAL_SUFFIX.replace(name, "").trim().to_lowercase()
}

/// Lowercases a domain and strips a single leading `www.`.
pub fn normalize_domain(domain: &str) -> String {
    let trimmed = domain.trim();
    let stripped = match trimmed.get(..4) {
        Some(prefix) if prefix.eq_ignore_ascii_case("www.") => &trimmed[4..],
        _ => trimmed,
    };
    stripped.trim().to_lowercase()
}

/// Comparable form of a lead, held in a side table for the duration of
/// one deduplication call so the output records never carry it.
#[derive(Debug, Clone, Default)]
struct NormalizedLead {
    domain: String,
    name: String,
}

impl NormalizedLead {
    fn from_lead(lead: &Lead) -> Self {
        NormalizedLead {
            domain: lead.domain.as_deref().map(normalize_domain).unwrap_or_default(),
            name: lead.company_name.as_deref().map(normalize_name).unwrap_or_default(),
        }
    }
}

/// Token-order-insensitive similarity ratio between two strings, 0-100.
fn token_sort_ratio(a: &str, b: &str) -> f64 {
    let sort_tokens = |s: &str| s.split_whitespace().sorted_unstable().join(" ");
    strsim::normalized_levenshtein(&sort_tokens(a), &sort_tokens(b)) * 100.0
}

/// Two leads refer to the same company iff their normalized domains are
/// equal (a strong, low-false-positive signal on its own) or their
/// normalized names are more than 90% similar. A lead with neither a
/// domain nor a name matches nothing.
fn is_match(a: &NormalizedLead, b: &NormalizedLead) -> bool {
    let domain_match = !a.domain.is_empty() && !b.domain.is_empty() && a.domain == b.domain;

    let name_similarity = match a.name.is_empty() || b.name.is_empty() {
        true => 0.0,
        false => token_sort_ratio(&a.name, &b.name),
    };

    domain_match || name_similarity > NAME_SIMILARITY_THRESHOLD
}

/// How matching leads are grouped.
///
/// `Greedy` is the historical behavior: a single pass where each group
/// only grows through matches against its current merged record, so
/// chains like A~B, B~C without A~C may or may not end up together
/// depending on scan order. `Transitive` closes over all pairwise
/// matches with a disjoint-set first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClosureStrategy {
    #[default]
    Greedy,
    Transitive,
}

/// Collapses leads that describe the same company into one record per
/// group. Output order follows the first appearance of each group's
/// seed; `emails`, `phones` and `source_urls` are unioned in first-seen
/// order with duplicates dropped.
pub fn deduplicate_leads(leads: Vec<Lead>, strategy: ClosureStrategy) -> Vec<Lead> {
    match strategy {
        ClosureStrategy::Greedy => deduplicate_greedy(leads),
        ClosureStrategy::Transitive => deduplicate_transitive(leads),
    }
}

fn deduplicate_greedy(leads: Vec<Lead>) -> Vec<Lead> {
    let mut normalized: Vec<NormalizedLead> = leads.iter().map(NormalizedLead::from_lead).collect();
    let mut slots: Vec<Option<Lead>> = leads.into_iter().map(Some).collect();
    let mut merged: Vec<Lead> = Vec::with_capacity(slots.len());

    for i in 0..slots.len() {
        let mut primary = match slots[i].take() {
            Some(lead) => lead,
            None => continue,
        };
        let mut primary_norm = normalized[i].clone();

        for j in (i + 1)..slots.len() {
            if slots[j].is_none() || !is_match(&primary_norm, &normalized[j]) {
                continue;
            }
            let mut other = match slots[j].take() {
                Some(lead) => lead,
                None => continue,
            };

            // The record with strictly more contact info wins the scalar
            // fields; swapping also swaps which normalized fields are
            // current for the rest of the scan.
            if other.contact_count() > primary.contact_count() {
                std::mem::swap(&mut primary, &mut other);
                std::mem::swap(&mut primary_norm, &mut normalized[j]);
            }

            fold_into(&mut primary, other);
        }

        dedupe_sets(&mut primary);
        merged.push(primary);
    }

    merged
}

fn deduplicate_transitive(leads: Vec<Lead>) -> Vec<Lead> {
    let normalized: Vec<NormalizedLead> = leads.iter().map(NormalizedLead::from_lead).collect();

    let mut sets = DisjointSet::new(leads.len());
    for i in 0..normalized.len() {
        for j in (i + 1)..normalized.len() {
            if is_match(&normalized[i], &normalized[j]) {
                sets.union(i, j);
            }
        }
    }

    // Bucket members by root, groups ordered by first appearance.
    let mut groups: Vec<Vec<usize>> = Vec::new();
    let mut group_of_root: HashMap<usize, usize> = HashMap::new();
    for index in 0..leads.len() {
        let root = sets.find(index);
        let slot = *group_of_root.entry(root).or_insert_with(|| {
            groups.push(Vec::new());
            groups.len() - 1
        });
        groups[slot].push(index);
    }

    let mut slots: Vec<Option<Lead>> = leads.into_iter().map(Some).collect();
    let mut merged: Vec<Lead> = Vec::with_capacity(groups.len());

    for members in groups {
        let mut primary: Option<Lead> = None;

        for index in members {
            let candidate = match slots[index].take() {
                Some(lead) => lead,
                None => continue,
            };
            primary = Some(match primary {
                None => candidate,
                Some(current) => {
                    // Same swap rule as the greedy pass.
                    let (mut keep, fold) = match candidate.contact_count() > current.contact_count()
                    {
                        true => (candidate, current),
                        false => (current, candidate),
                    };
                    fold_into(&mut keep, fold);
                    keep
                }
            });
        }

        if let Some(mut lead) = primary {
            dedupe_sets(&mut lead);
            merged.push(lead);
        }
    }

    merged
}

/// Unions the set-valued fields of `other` into `primary`. Scalar fields
/// stay with the primary.
fn fold_into(primary: &mut Lead, other: Lead) {
    union_field(&mut primary.emails, other.emails);
    union_field(&mut primary.phones, other.phones);
    union_field(&mut primary.source_urls, other.source_urls);
}

fn union_field(dst: &mut Vec<String>, src: Vec<String>) {
    for value in src {
        if !dst.contains(&value) {
            dst.push(value);
        }
    }
}

fn dedupe_sets(lead: &mut Lead) {
    dedupe_field(&mut lead.emails);
    dedupe_field(&mut lead.phones);
    dedupe_field(&mut lead.source_urls);
}

fn dedupe_field(values: &mut Vec<String>) {
    let mut seen = HashSet::new();
    values.retain(|value| seen.insert(value.clone()));
}

struct DisjointSet {
    parent: Vec<usize>,
}

impl DisjointSet {
    fn new(len: usize) -> Self {
        DisjointSet {
            parent: (0..len).collect(),
        }
    }

    fn find(&mut self, index: usize) -> usize {
        let mut root = index;
        while self.parent[root] != root {
            root = self.parent[root];
        }
        let mut current = index;
        while current != root {
            let next = self.parent[current];
            self.parent[current] = root;
            current = next;
        }
        root
    }

    fn union(&mut self, a: usize, b: usize) {
        let root_a = self.find(a);
        let root_b = self.find(b);
        if root_a != root_b {
            self.parent[root_b] = root_a;
        }
    }
}
