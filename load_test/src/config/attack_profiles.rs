/// Load shape of a single run: how many students, how fast they arrive,
/// and how long the attack lasts.
#[derive(Debug, Clone, PartialEq)]
pub struct AttackProfile {
    pub name: &'static str,
    pub users: usize,
    /// Users launched per second, as the framework expects it (may be fractional)
    pub hatch_rate: String,
    /// Seconds
    pub run_time: usize,
}

/// Get attack settings by profile name
pub fn get_attack_profile(profile: &str) -> AttackProfile {
    match profile {
        "smoke" => smoke_profile(),
        "standard" => standard_profile(),
        "stress" => stress_profile(),
        _ => {
            tracing::warn!("Unknown profile '{}', using 'standard' profile", profile);
            standard_profile()
        }
    }
}

/// Smoke profile for checking a deployment answers at all
///
/// - 1 student
/// - 1 user/sec hatch rate
/// - 30 seconds
pub fn smoke_profile() -> AttackProfile {
    AttackProfile {
        name: "smoke",
        users: 1,
        hatch_rate: "1".to_string(),
        run_time: 30,
    }
}

/// Standard profile, a class-sized burst of activity
///
/// - 50 students
/// - 5 users/sec hatch rate
/// - 5 minutes
pub fn standard_profile() -> AttackProfile {
    AttackProfile {
        name: "standard",
        users: 50,
        hatch_rate: "5".to_string(),
        run_time: 300,
    }
}

/// Stress profile, exam-day traffic
///
/// - 500 students
/// - 25 users/sec hatch rate
/// - 15 minutes
pub fn stress_profile() -> AttackProfile {
    AttackProfile {
        name: "stress",
        users: 500,
        hatch_rate: "25".to_string(),
        run_time: 900,
    }
}

impl AttackProfile {
    /// Apply command line overrides on top of the profile
    pub fn with_overrides(
        mut self,
        users: Option<usize>,
        hatch_rate: Option<String>,
        run_time: Option<usize>,
    ) -> Self {
        if let Some(users) = users {
            self.users = users;
        }
        if let Some(hatch_rate) = hatch_rate {
            self.hatch_rate = hatch_rate;
        }
        if let Some(run_time) = run_time {
            self.run_time = run_time;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_profiles_resolve_by_name() {
        assert_eq!(get_attack_profile("smoke"), smoke_profile());
        assert_eq!(get_attack_profile("standard"), standard_profile());
        assert_eq!(get_attack_profile("stress").users, 500);
    }

    #[test]
    fn unknown_profile_falls_back_to_standard() {
        assert_eq!(get_attack_profile("nope"), standard_profile());
    }

    #[test]
    fn overrides_replace_only_given_fields() {
        let profile = smoke_profile().with_overrides(Some(8), None, Some(12));
        assert_eq!(profile.users, 8);
        assert_eq!(profile.hatch_rate, "1");
        assert_eq!(profile.run_time, 12);
    }
}
