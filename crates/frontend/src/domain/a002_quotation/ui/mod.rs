pub mod details;
pub mod list;

use contracts::domain::a002_quotation::QuotationStatus;
use leptos::prelude::*;
use thaw::*;

fn status_color(status: &QuotationStatus) -> BadgeColor {
    match status {
        QuotationStatus::Pending => BadgeColor::Warning,
        QuotationStatus::Sent => BadgeColor::Informative,
        QuotationStatus::Accepted => BadgeColor::Success,
        QuotationStatus::Failed | QuotationStatus::Rejected => BadgeColor::Danger,
        QuotationStatus::Other(_) => BadgeColor::Subtle,
    }
}

#[component]
#[allow(non_snake_case)]
pub fn StatusBadge(status: QuotationStatus) -> impl IntoView {
    let color = status_color(&status);
    let label = status.label().to_string();
    view! {
        <Badge appearance=BadgeAppearance::Tint color=color>
            {label}
        </Badge>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_status_is_subtle() {
        assert!(matches!(
            status_color(&QuotationStatus::Other("archived".into())),
            BadgeColor::Subtle
        ));
        assert!(matches!(status_color(&QuotationStatus::Pending), BadgeColor::Warning));
    }
}
