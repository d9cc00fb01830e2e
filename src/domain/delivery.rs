/// How an accepted message went out: as one transport unit or as an
/// ordered multipart sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delivery {
    Single,
    Multipart { parts: usize },
}

impl Delivery {
    /// Confirmation line reported back over the method channel.
    pub fn confirmation(&self) -> String {
        match self {
            Delivery::Single => "SMS sent successfully".to_owned(),
            Delivery::Multipart { parts } => {
                format!("Multipart SMS sent successfully ({parts} parts)")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_delivery_confirmation_is_exact() {
        assert_eq!(Delivery::Single.confirmation(), "SMS sent successfully");
    }

    #[test]
    fn multipart_confirmation_includes_part_count() {
        assert_eq!(
            Delivery::Multipart { parts: 3 }.confirmation(),
            "Multipart SMS sent successfully (3 parts)"
        );
    }
}
