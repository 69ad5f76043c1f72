use chrono::Datelike;
use leptos::prelude::*;

/// Current calendar year, if the clock reports a four-digit one.
pub fn current_year() -> Option<i32> {
    four_digit(chrono::Local::now().year())
}

fn four_digit(year: i32) -> Option<i32> {
    if (1000..=9999).contains(&year) {
        Some(year)
    } else {
        tracing::warn!(year, "clock returned an unusable year, omitting it from the footer");
        None
    }
}

pub fn copyright_line(year: Option<i32>) -> String {
    match year {
        Some(year) => format!("© {year} NarenP — Software Development & Data Science"),
        None => "© NarenP — Software Development & Data Science".to_string(),
    }
}

#[component]
pub fn Footer(year: Option<i32>) -> impl IntoView {
    view! {
        <footer class="mt-16 border-t bg-white/60 border-gray-200">
            <div class="max-w-7xl mx-auto px-6 py-8 flex flex-col sm:flex-row items-center justify-between gap-4">
                <div class="copyright text-sm text-gray-600">{copyright_line(year)}</div>
                <div class="text-sm text-gray-600">"Built with code & data • Pune, India"</div>
            </div>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn current_year_matches_clock() {
        let year = current_year().expect("system clock should report a year");
        assert_eq!(year, chrono::Local::now().year());
        assert_eq!(year.to_string().len(), 4);
    }

    #[test]
    fn rejects_years_outside_four_digits() {
        assert_eq!(four_digit(2025), Some(2025));
        assert_eq!(four_digit(999), None);
        assert_eq!(four_digit(10_000), None);
        assert_eq!(four_digit(-1), None);
    }

    #[test]
    fn copyright_line_with_and_without_year() {
        assert_eq!(
            copyright_line(Some(2026)),
            "© 2026 NarenP — Software Development & Data Science"
        );
        assert_eq!(
            copyright_line(None),
            "© NarenP — Software Development & Data Science"
        );
    }
}
