use relm4::gtk::glib;

use crate::color::Rgba;

/// Wraps clock text in a Pango span carrying font, color and alpha.
///
/// Both the text and the font description are escaped, so arbitrary
/// settings values cannot break the markup.
pub fn clock_markup(text: &str, font: &str, color: Rgba) -> String {
    format!(
        "<span font_desc=\"{}\" foreground=\"{}\" fgalpha=\"{}\">{}</span>",
        glib::markup_escape_text(font),
        color.to_hex(),
        alpha_units(color.alpha),
        glib::markup_escape_text(text),
    )
}

// Pango takes alpha as 1..=65535; 0 is rejected.
fn alpha_units(alpha: u8) -> u32 {
    (u32::from(alpha) * 65535 / 255).max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opaque_color_span() {
        let markup = clock_markup("12:00", "Ubuntu Mono 24", Rgba::WHITE);

        assert_eq!(
            markup,
            "<span font_desc=\"Ubuntu Mono 24\" foreground=\"#ffffff\" fgalpha=\"65535\">12:00</span>"
        );
    }

    #[test]
    fn translucent_alpha_is_scaled() {
        let markup = clock_markup("x", "Sans 10", Rgba::new(255, 0, 0, 204));

        assert!(markup.contains("fgalpha=\"52428\""));
        assert!(markup.contains("foreground=\"#ff0000\""));
    }

    #[test]
    fn zero_alpha_is_clamped_to_minimum() {
        let markup = clock_markup("x", "Sans 10", Rgba::new(0, 0, 0, 0));

        assert!(markup.contains("fgalpha=\"1\""));
    }

    #[test]
    fn text_and_font_are_escaped() {
        let markup = clock_markup("a<b>&c", "Evil\" weight=\"bold", Rgba::WHITE);

        assert!(markup.contains(">a&lt;b&gt;&amp;c</span>"));
        assert!(markup.contains("font_desc=\"Evil&quot; weight=&quot;bold\""));
    }

    #[test]
    fn multi_line_text_is_kept() {
        let markup = clock_markup("01\n02:03", "Sans 10", Rgba::WHITE);

        assert!(markup.contains(">01\n02:03<"));
    }
}
