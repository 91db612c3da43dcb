//! Deterministic landing page used when no generative backend is configured.
//!
//! User answers are embedded verbatim. The output is only ever shown inside a
//! sandboxed preview or exported by the user themselves.

use chrono::Datelike;

use crate::form::{FormData, GeneratedPage};

/// Icons cycled across benefit cards by position
pub const BENEFIT_ICONS: [&str; 3] = ["⭐", "🎯", "✅"];

const ACCENT_TOKEN: &str = "%ACCENT%";

/// Render the template page for `data` using `accent` as the brand color
pub fn render_page(data: &FormData, accent: &str) -> GeneratedPage {
    GeneratedPage {
        html: render_html(data),
        css: render_css(accent),
    }
}

fn render_html(data: &FormData) -> String {
    let name = &data.business_name;
    let cta = &data.call_to_action;
    let year = chrono::Utc::now().year();

    let mut html = String::with_capacity(2048);
    html.push_str(&format!(
        r##"
<header class="hero">
  <nav class="nav">
    <div class="nav-brand">{name}</div>
    <a href="#contact" class="nav-cta">{cta}</a>
  </nav>
  <div class="hero-content">
    <h1 class="hero-title">{problem}</h1>
    <p class="hero-subtitle">Serving {audience} with excellence and dedication.</p>
    <a href="#contact" class="btn btn-primary">{cta}</a>
  </div>
</header>

<section class="benefits">
  <div class="container">
    <h2 class="section-title">Why Choose {name}?</h2>
    <div class="benefits-grid">
"##,
        problem = data.problem_solved,
        audience = data.target_audience,
    ));

    for (i, benefit) in data.benefits().into_iter().enumerate() {
        let icon = BENEFIT_ICONS[i % BENEFIT_ICONS.len()];
        html.push_str(&format!(
            r#"      <div class="benefit-card">
        <div class="benefit-icon">{icon}</div>
        <h3>{benefit}</h3>
      </div>
"#
        ));
    }

    html.push_str(&format!(
        r##"    </div>
  </div>
</section>

<section class="testimonial">
  <div class="container">
    <blockquote>
      <p>"Working with {name} was the best decision we made. Highly recommended!"</p>
      <cite>— Happy Customer</cite>
    </blockquote>
  </div>
</section>

<section id="contact" class="cta-section">
  <div class="container">
    <h2>Ready to Get Started?</h2>
    <p>Contact us today and let's discuss how we can help you.</p>
    <a href="#" class="btn btn-primary btn-lg">{cta}</a>
  </div>
</section>

<footer class="footer">
  <div class="container">
    <p>© {year} {name}. All rights reserved.</p>
  </div>
</footer>
"##
    ));

    html
}

fn render_css(accent: &str) -> String {
    STYLESHEET.replace(ACCENT_TOKEN, accent)
}

const STYLESHEET: &str = r#"
* {
  margin: 0;
  padding: 0;
  box-sizing: border-box;
}

body {
  font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
  line-height: 1.6;
  color: #1f2937;
}

.container {
  max-width: 1200px;
  margin: 0 auto;
  padding: 0 20px;
}

/* Navigation */
.nav {
  display: flex;
  justify-content: space-between;
  align-items: center;
  padding: 20px 40px;
  position: absolute;
  top: 0;
  left: 0;
  right: 0;
  z-index: 100;
}

.nav-brand {
  font-size: 1.5rem;
  font-weight: 700;
  color: white;
}

.nav-cta {
  background: white;
  color: %ACCENT%;
  padding: 10px 24px;
  border-radius: 8px;
  text-decoration: none;
  font-weight: 600;
  transition: transform 0.2s;
}

.nav-cta:hover {
  transform: translateY(-2px);
}

/* Hero */
.hero {
  background: linear-gradient(135deg, %ACCENT% 0%, %ACCENT%dd 100%);
  min-height: 100vh;
  display: flex;
  flex-direction: column;
  justify-content: center;
  align-items: center;
  text-align: center;
  padding: 40px 20px;
  position: relative;
}

.hero-content {
  max-width: 800px;
}

.hero-title {
  font-size: clamp(2rem, 5vw, 3.5rem);
  color: white;
  margin-bottom: 20px;
  line-height: 1.2;
}

.hero-subtitle {
  font-size: 1.25rem;
  color: rgba(255,255,255,0.9);
  margin-bottom: 40px;
}

/* Buttons */
.btn {
  display: inline-block;
  padding: 16px 32px;
  border-radius: 8px;
  text-decoration: none;
  font-weight: 600;
  transition: all 0.2s;
  cursor: pointer;
  border: none;
}

.btn-primary {
  background: white;
  color: %ACCENT%;
}

.btn-primary:hover {
  transform: translateY(-2px);
  box-shadow: 0 10px 30px rgba(0,0,0,0.2);
}

.btn-lg {
  padding: 20px 40px;
  font-size: 1.125rem;
}

/* Benefits */
.benefits {
  padding: 100px 20px;
  background: #f9fafb;
}

.section-title {
  text-align: center;
  font-size: 2.5rem;
  margin-bottom: 60px;
  color: #111827;
}

.benefits-grid {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(280px, 1fr));
  gap: 30px;
  max-width: 1000px;
  margin: 0 auto;
}

.benefit-card {
  background: white;
  padding: 40px;
  border-radius: 16px;
  text-align: center;
  box-shadow: 0 4px 20px rgba(0,0,0,0.08);
}

.benefit-icon {
  font-size: 3rem;
  margin-bottom: 20px;
}

.benefit-card h3 {
  font-size: 1.25rem;
  color: #374151;
}

/* Testimonial */
.testimonial {
  padding: 100px 20px;
  background: white;
}

.testimonial blockquote {
  max-width: 700px;
  margin: 0 auto;
  text-align: center;
}

.testimonial p {
  font-size: 1.5rem;
  font-style: italic;
  color: #4b5563;
  margin-bottom: 20px;
}

.testimonial cite {
  color: %ACCENT%;
  font-weight: 600;
}

/* CTA Section */
.cta-section {
  padding: 100px 20px;
  background: linear-gradient(135deg, %ACCENT% 0%, %ACCENT%dd 100%);
  text-align: center;
  color: white;
}

.cta-section h2 {
  font-size: 2.5rem;
  margin-bottom: 20px;
}

.cta-section p {
  font-size: 1.25rem;
  opacity: 0.9;
  margin-bottom: 40px;
}

/* Footer */
.footer {
  padding: 40px 20px;
  background: #111827;
  color: #9ca3af;
  text-align: center;
}

/* Responsive */
@media (max-width: 768px) {
  .nav {
    padding: 15px 20px;
  }

  .nav-brand {
    font-size: 1.25rem;
  }

  .hero {
    min-height: auto;
    padding: 120px 20px 80px;
  }

  .benefits, .testimonial, .cta-section {
    padding: 60px 20px;
  }
}
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::Tone;

    fn sample() -> FormData {
        FormData {
            business_name: "Acme Construction".into(),
            industry: "Home building".into(),
            target_audience: "Homeowners in Auckland".into(),
            problem_solved: "We turn outdated homes into modern dream spaces".into(),
            key_benefits: "A, B, C".into(),
            call_to_action: "Get a free quote".into(),
            tone: Tone::Professional,
        }
    }

    #[test]
    fn test_page_embeds_answers_verbatim() {
        let page = render_page(&sample(), "#f97316");
        assert!(!page.html.is_empty());
        assert!(!page.css.is_empty());
        assert!(page.html.contains("Acme Construction"));
        assert!(page.html.contains("Get a free quote"));
        assert!(page.html.contains("Serving Homeowners in Auckland"));
        assert!(page.html.contains("We turn outdated homes"));
    }

    #[test]
    fn test_three_benefits_cycle_icons() {
        let page = render_page(&sample(), "#f97316");
        assert_eq!(page.html.matches(r#"class="benefit-card""#).count(), 3);

        let a = page.html.find("<h3>A</h3>").unwrap();
        let b = page.html.find("<h3>B</h3>").unwrap();
        let c = page.html.find("<h3>C</h3>").unwrap();
        let star = page.html.find("⭐").unwrap();
        let target = page.html.find("🎯").unwrap();
        let check = page.html.find("✅").unwrap();
        assert!(star < a && a < target && target < b && b < check && check < c);
    }

    #[test]
    fn test_fourth_benefit_wraps_to_first_icon() {
        let mut data = sample();
        data.key_benefits = "One, Two, Three, Four".into();
        let page = render_page(&data, "#f97316");
        assert_eq!(page.html.matches("⭐").count(), 2);
    }

    #[test]
    fn test_empty_segment_still_renders_card() {
        let mut data = sample();
        data.key_benefits = "Fast,,Friendly".into();
        let page = render_page(&data, "#f97316");
        assert_eq!(page.html.matches(r#"class="benefit-card""#).count(), 3);
        assert!(page.html.contains("<h3></h3>"));
    }

    #[test]
    fn test_sections_render_in_order_with_footer_year() {
        let html = render_page(&sample(), "#f97316").html;
        let year = chrono::Utc::now().year();
        let hero = html.find(r#"<header class="hero">"#).unwrap();
        let benefits = html.find(r#"<section class="benefits">"#).unwrap();
        let testimonial = html.find(r#"<section class="testimonial">"#).unwrap();
        let cta = html.find(r#"<section id="contact""#).unwrap();
        let footer = html
            .find(&format!("© {year} Acme Construction. All rights reserved."))
            .unwrap();
        assert!(hero < benefits && benefits < testimonial && testimonial < cta && cta < footer);
        assert_eq!(html.matches("Get a free quote").count(), 3);
    }

    #[test]
    fn test_accent_reaches_every_substitution_point() {
        let css = render_page(&sample(), "#123456").css;
        assert!(!css.contains(ACCENT_TOKEN));
        // nav-cta, hero x2, btn-primary, cite, cta-section x2
        assert_eq!(css.matches("#123456").count(), 7);
        assert_eq!(css.matches("#123456dd").count(), 2);
    }
}
