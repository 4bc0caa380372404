use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::common::{ConnectionStatus, Member, default_avatar};
use crate::community::{INTERESTS, PROJECTS};

const ROLES: [&str; 5] = ["Developer", "Designer", "Manager", "Analyst", "Specialist"];
const DEPARTMENTS: [&str; 5] = ["Design", "Engineering", "Marketing", "Product", "Research"];
const STATUSES: [ConnectionStatus; 3] = [
    ConnectionStatus::None,
    ConnectionStatus::Pending,
    ConnectionStatus::Connected,
];

/// Build `count` directory members. The same seed yields the same directory.
pub fn generate_members(count: usize, seed: Option<u64>) -> Vec<Member> {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    (1..=count)
        .map(|n| Member {
            id: format!("member-{n}"),
            name: format!("Member {n}"),
            role: pick(&mut rng, &ROLES),
            department: pick(&mut rng, &DEPARTMENTS),
            avatar: default_avatar(),
            interests: sample(&mut rng, &INTERESTS, 1..=3),
            projects: sample(&mut rng, &PROJECTS, 1..=2),
            status: STATUSES[rng.gen_range(0..STATUSES.len())],
        })
        .collect()
}

fn pick(rng: &mut StdRng, values: &[&str]) -> String {
    values.choose(rng).copied().unwrap_or_default().to_string()
}

fn sample(rng: &mut StdRng, values: &[&str], amount: std::ops::RangeInclusive<usize>) -> Vec<String> {
    let amount = rng.gen_range(amount);
    values
        .choose_multiple(rng, amount)
        .map(|value| value.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_seeded_generation_is_repeatable() {
        assert_eq!(generate_members(12, Some(7)), generate_members(12, Some(7)));
    }

    #[test]
    fn test_generated_members_are_well_formed() {
        let members = generate_members(12, Some(42));
        assert_eq!(members.len(), 12);
        assert_eq!(members[0].id, "member-1");
        assert_eq!(members[11].name, "Member 12");

        for member in &members {
            assert!((1..=3).contains(&member.interests.len()));
            assert!((1..=2).contains(&member.projects.len()));
            let distinct: HashSet<_> = member.interests.iter().collect();
            assert_eq!(distinct.len(), member.interests.len());
            assert!(ROLES.contains(&member.role.as_str()));
            assert!(DEPARTMENTS.contains(&member.department.as_str()));
        }
    }

    #[test]
    fn test_zero_members() {
        assert!(generate_members(0, None).is_empty());
    }
}
