//! Property-based tests for the classname transforms using proptest.

use proptest::prelude::*;
use stylebind::{camel_case, dash_case, transform_classname, ClassnameTransform};

const ALL_MODES: &[ClassnameTransform] = &[
    ClassnameTransform::AsIs,
    ClassnameTransform::CamelCase,
    ClassnameTransform::CamelCaseOnly,
    ClassnameTransform::Dashes,
    ClassnameTransform::DashesOnly,
];

proptest! {
    /// The first candidate is defined and non-empty for any non-empty name.
    #[test]
    fn first_candidate_is_nonempty(name in "[-_a-zA-Z0-9]{1,16}") {
        for mode in ALL_MODES {
            let candidates = transform_classname(*mode, &name);
            prop_assert!(!candidates.is_empty());
            prop_assert!(!candidates[0].is_empty());
        }
    }

    /// The two-entry modes always keep the original name first.
    #[test]
    fn original_name_leads_for_additive_modes(name in "[-_a-zA-Z0-9]{1,16}") {
        for mode in [ClassnameTransform::CamelCase, ClassnameTransform::Dashes] {
            let candidates = transform_classname(mode, &name);
            prop_assert_eq!(candidates[0].as_str(), name.as_str());
            prop_assert!(candidates.len() <= 2);
        }
    }

    /// Dash-casing is idempotent: once the hyphen runs are gone, nothing is
    /// left for a second pass to do.
    #[test]
    fn dash_case_is_idempotent(name in "[-_a-zA-Z0-9]{1,16}") {
        let once = dash_case(&name);
        prop_assert_eq!(dash_case(&once), once.clone());
    }

    /// Dash-casing never touches underscores.
    #[test]
    fn dash_case_preserves_underscores(name in "[-_a-zA-Z0-9]{1,16}") {
        let underscores = name.matches('_').count();
        prop_assert_eq!(dash_case(&name).matches('_').count(), underscores);
    }

    /// Camel-casing a name with at least one alphanumeric strips every
    /// separator.
    #[test]
    fn camel_case_output_is_alphanumeric(name in "[-_]{0,3}[a-zA-Z0-9]{1,8}[-_a-zA-Z0-9]{0,8}") {
        let transformed = camel_case(&name);
        prop_assert!(transformed.chars().all(|c| c.is_ascii_alphanumeric()));
    }

    /// Transforming twice with a *-Only mode agrees with transforming once.
    #[test]
    fn only_modes_are_stable(name in "[-_a-zA-Z0-9]{1,16}") {
        let camel = transform_classname(ClassnameTransform::CamelCaseOnly, &name);
        let camel_again = transform_classname(ClassnameTransform::CamelCaseOnly, &camel[0]);
        prop_assert_eq!(&camel_again[0], &camel[0]);

        let dashes = transform_classname(ClassnameTransform::DashesOnly, &name);
        let dashes_again = transform_classname(ClassnameTransform::DashesOnly, &dashes[0]);
        prop_assert_eq!(&dashes_again[0], &dashes[0]);
    }
}
