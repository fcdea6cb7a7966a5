use uuid::Uuid;

#[cfg_attr(test, mockall::automock)]
pub trait RequestIdGenerator: Send + Sync {
    fn generate(&self) -> String;
}

/// UUIDv7-backed generator: ids carry a millisecond timestamp prefix, so they
/// sort by generation time, and render as 32 uppercase hex characters with no
/// delimiters.
#[derive(Clone, Default)]
pub struct UuidRequestIdGenerator {}

impl RequestIdGenerator for UuidRequestIdGenerator {
    fn generate(&self) -> String {
        Uuid::now_v7().simple().to_string().to_uppercase()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::thread;
    use std::time::Duration;

    use crate::request_id::{RequestIdGenerator, UuidRequestIdGenerator};

    #[test]
    fn should_generate_uppercase_alphanumeric_ids_of_fixed_length() {
        let id = UuidRequestIdGenerator::default().generate();

        assert_eq!(id.len(), 32);
        assert!(
            id.chars()
                .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit())
        );
    }

    #[test]
    fn should_generate_unique_ids_under_concurrency() {
        let handles: Vec<_> = (0..8)
            .map(|_| {
                thread::spawn(|| {
                    let generator = UuidRequestIdGenerator::default();
                    (0..250).map(|_| generator.generate()).collect::<Vec<_>>()
                })
            })
            .collect();

        let ids: HashSet<String> = handles
            .into_iter()
            .flat_map(|handle| handle.join().unwrap())
            .collect();

        assert_eq!(ids.len(), 8 * 250);
    }

    #[test]
    fn should_generate_ids_ordered_by_generation_time() {
        let generator = UuidRequestIdGenerator::default();

        let earlier = generator.generate();
        thread::sleep(Duration::from_millis(2));
        let later = generator.generate();

        assert!(earlier < later);
    }
}
