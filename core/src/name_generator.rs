//! Deterministic fabrication of company names and user emails.
//!
//! Curated lists stand in for the faker-style libraries a
//! non-deterministic generator would reach for: same RNG stream, same
//! names, every run.

use crate::rng::GeneratorRng;

pub struct NameGenerator;

impl NameGenerator {
    /// Company name for a customer account.
    /// Format: "Prefix Industry Suffix" or "LastName Industry Suffix".
    pub fn company_name(rng: &mut GeneratorRng) -> String {
        let industry = *rng.pick(Self::industries());
        let suffix = *rng.pick(Self::company_suffixes());

        if rng.chance(0.5) {
            let prefix = *rng.pick(Self::company_prefixes());
            format!("{prefix} {industry} {suffix}")
        } else {
            let surname = *rng.pick(Self::last_names());
            format!("{surname} {industry} {suffix}")
        }
    }

    /// User email. The sequence number keeps addresses unique across the
    /// whole dataset even when a first/last pair repeats.
    pub fn email(rng: &mut GeneratorRng, sequence: u64) -> String {
        let first = rng.pick(Self::first_names()).to_lowercase();
        let last = rng.pick(Self::last_names()).to_lowercase();
        let domain = *rng.pick(Self::email_domains());
        format!("{first}.{last}{sequence}@{domain}")
    }

    fn first_names() -> &'static [&'static str] {
        &[
            "James", "Mary", "Robert", "Patricia", "John", "Jennifer", "Michael", "Linda",
            "David", "Elizabeth", "William", "Barbara", "Richard", "Susan", "Joseph",
            "Jessica", "Thomas", "Sarah", "Christopher", "Karen", "Charles", "Lisa",
            "Daniel", "Nancy", "Matthew", "Emily", "Anthony", "Sandra", "Mark", "Michelle",
            "Steven", "Amanda", "Andrew", "Melissa", "Joshua", "Stephanie", "Kevin",
            "Rebecca", "Brian", "Laura", "George", "Sharon", "Timothy", "Cynthia",
            "Ronald", "Amy", "Jason", "Angela", "Ryan", "Anna", "Jacob", "Nicole",
            "Gary", "Samantha", "Nicholas", "Katherine", "Eric", "Christine", "Jonathan",
            "Rachel", "Stephen", "Catherine", "Larry", "Maria", "Justin", "Heather",
            "Scott", "Diane", "Brandon", "Olivia", "Benjamin", "Julie", "Samuel",
            "Victoria", "Gregory", "Lauren", "Alexander", "Christina", "Patrick", "Megan",
        ]
    }

    fn last_names() -> &'static [&'static str] {
        &[
            "Smith", "Johnson", "Williams", "Brown", "Jones", "Garcia", "Miller", "Davis",
            "Rodriguez", "Martinez", "Hernandez", "Lopez", "Gonzalez", "Wilson",
            "Anderson", "Thomas", "Taylor", "Moore", "Jackson", "Martin", "Lee", "Perez",
            "Thompson", "White", "Harris", "Sanchez", "Clark", "Ramirez", "Lewis",
            "Robinson", "Walker", "Young", "Allen", "King", "Wright", "Scott", "Torres",
            "Nguyen", "Hill", "Flores", "Green", "Adams", "Nelson", "Baker", "Hall",
            "Rivera", "Campbell", "Mitchell", "Carter", "Roberts", "Gomez", "Phillips",
            "Evans", "Turner", "Diaz", "Parker", "Cruz", "Edwards", "Collins", "Stewart",
            "Morris", "Murphy", "Cook", "Rogers", "Morgan", "Peterson", "Cooper", "Reed",
            "Bailey", "Bell", "Kelly", "Howard", "Ward", "Cox", "Brooks", "Chen", "Wood",
            "Patel", "Bennett", "Gray",
        ]
    }

    fn company_prefixes() -> &'static [&'static str] {
        &[
            "Premier", "Apex", "First", "Summit", "Quantum", "Vertex", "Atlas", "Nova",
            "Metro", "Pacific", "Northern", "Coastal", "Central", "United", "Global",
            "Pioneer", "Beacon", "Keystone", "Cascade", "Meridian",
        ]
    }

    fn company_suffixes() -> &'static [&'static str] {
        &[
            "LLC", "Inc", "Corp", "Co", "Group", "Partners", "Solutions", "Systems",
            "Technologies", "Industries", "Holdings", "Ventures", "Labs",
        ]
    }

    fn industries() -> &'static [&'static str] {
        &[
            "Logistics", "Analytics", "Robotics", "Media", "Biotech", "Energy",
            "Manufacturing", "Retail", "Insurance", "Financial", "Consulting",
            "Software", "Healthcare", "Aerospace", "Construction", "Hospitality",
            "Telecom", "Automotive", "Agriculture", "Education",
        ]
    }

    fn email_domains() -> &'static [&'static str] {
        &["example.com", "example.org", "example.net"]
    }
}
