use crate::model::Addition;
use std::collections::HashMap;

/// Additions made by one contributor, in file order
#[derive(Debug, Clone)]
pub struct Contributions<'a> {
    pub contributor: &'a str,
    pub additions: Vec<&'a Addition>,
}

/// Group additions by contributor
///
/// Contributors appear in order of their first addition; each group keeps
/// the file order of its additions.
pub fn partition_by_contributor(additions: &[Addition]) -> Vec<Contributions<'_>> {
    let mut groups: Vec<Contributions<'_>> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for addition in additions {
        let contributor = addition.contributor.as_str();
        let slot = *index.entry(contributor).or_insert_with(|| {
            groups.push(Contributions {
                contributor,
                additions: Vec::new(),
            });
            groups.len() - 1
        });
        groups[slot].additions.push(addition);
    }

    groups
}
