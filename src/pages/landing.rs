use log::info;
use yew::prelude::*;

use crate::components::flip_card::{FlipCard, FlipVariant};
use crate::components::roi_section::RoiSection;
use crate::dom;

#[function_component(Landing)]
pub fn landing() -> Html {
    // Bind the widgets once the markup is in the document; dropping the
    // bindings on unmount removes every listener.
    {
        use_effect_with_deps(
            move |_| {
                let bindings = match dom::mount() {
                    Ok(bindings) => {
                        info!("Landing widgets mounted");
                        Some(bindings)
                    }
                    Err(e) => {
                        gloo_console::error!(format!("Landing widgets not mounted: {}", e));
                        None
                    }
                };
                move || drop(bindings)
            },
            (),
        );
    }

    let page_css = r#"
        .landing-page {
            position: relative;
            color: #1d1d1f;
            font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
        }
        body.is-locked {
            overflow: hidden;
        }
        .hero {
            position: relative;
            min-height: 80vh;
            display: flex;
            align-items: center;
            justify-content: center;
            overflow: hidden;
            text-align: center;
            padding: 6rem 2rem 4rem;
        }
        .hero__bg {
            position: absolute;
            inset: -140px 0 0 0;
            background: radial-gradient(circle at 30% 20%, #ffe9c7, transparent 55%),
                        radial-gradient(circle at 75% 60%, #d5e8ff, transparent 50%),
                        #fbfaf7;
            z-index: -1;
            will-change: transform;
        }
        .hero h1 {
            font-size: 3.2rem;
            margin-bottom: 1rem;
        }
        .hero-subtitle {
            font-size: 1.25rem;
            max-width: 640px;
            margin: 0 auto 2rem;
            color: #4a4a4f;
        }
        .hero-cta {
            display: inline-block;
            padding: 0.9rem 2rem;
            border-radius: 999px;
            background: #1d1d1f;
            color: #fff;
            text-decoration: none;
        }
        .section {
            max-width: 1100px;
            margin: 0 auto;
            padding: 4rem 2rem;
        }
        .section h2 {
            font-size: 2.2rem;
            text-align: center;
            margin-bottom: 2rem;
        }
        .flip-grid {
            display: grid;
            grid-template-columns: repeat(auto-fit, minmax(260px, 1fr));
            gap: 1.5rem;
        }
        .flip-card {
            position: relative;
            min-height: 280px;
            perspective: 1200px;
        }
        .flip-front,
        .flip-back {
            position: absolute;
            inset: 0;
            padding: 1.75rem;
            border-radius: 20px;
            backface-visibility: hidden;
            transition: transform 0.5s ease;
            box-shadow: 0 12px 30px rgba(0, 0, 0, 0.08);
        }
        .flip-front {
            background: #fff;
            cursor: pointer;
        }
        .flip-back {
            background: #1d1d1f;
            color: #f5f5f7;
            transform: rotateY(180deg);
            overflow-y: auto;
        }
        .flip-card.is-open .flip-front {
            transform: rotateY(-180deg);
        }
        .flip-card.is-open .flip-back {
            transform: rotateY(0deg);
        }
        .flip-card--overlay.is-open {
            z-index: 20;
        }
        .flip-card--overlay.is-open .flip-back {
            position: fixed;
            inset: 10vh 10vw;
            padding: 2.5rem;
        }
        .flip-kicker {
            text-transform: uppercase;
            letter-spacing: 0.08em;
            font-size: 0.8rem;
            color: #8a8a8f;
        }
        .poster-plus,
        .poster-close {
            position: absolute;
            right: 1rem;
            width: 2.25rem;
            height: 2.25rem;
            border-radius: 50%;
            border: none;
            font-size: 1.4rem;
            cursor: pointer;
        }
        .poster-plus {
            bottom: 1rem;
            background: #1d1d1f;
            color: #fff;
        }
        .poster-close {
            top: 1rem;
            background: rgba(255, 255, 255, 0.15);
            color: #fff;
        }
        .flip-note {
            margin-top: 1.5rem;
            font-size: 0.9rem;
            color: #c7c7cc;
        }
        .flip-note a {
            color: #ffd28a;
        }
        .flip-overlay {
            position: fixed;
            inset: 0;
            background: rgba(10, 10, 12, 0.55);
            backdrop-filter: blur(6px);
            opacity: 0;
            pointer-events: none;
            transition: opacity 0.3s ease;
            z-index: 10;
        }
        .flip-overlay.is-visible {
            opacity: 1;
            pointer-events: auto;
        }
        .roi {
            max-width: 1100px;
            margin: 0 auto;
            padding: 4rem 2rem;
        }
        .roi h2 {
            font-size: 2.2rem;
            text-align: center;
        }
        .roi-intro {
            text-align: center;
            color: #4a4a4f;
            margin-bottom: 2.5rem;
        }
        .roi-grid {
            display: grid;
            grid-template-columns: 3fr 2fr;
            gap: 2rem;
        }
        .roi-slider {
            margin-bottom: 1.75rem;
        }
        .roi-slider label {
            display: flex;
            justify-content: space-between;
            margin-bottom: 0.5rem;
        }
        .roi-slider input[type="range"] {
            width: 100%;
        }
        .roi-kpi {
            background: #fff;
            border-radius: 20px;
            padding: 1.5rem;
            margin-bottom: 1rem;
            box-shadow: 0 12px 30px rgba(0, 0, 0, 0.08);
        }
        .roi-kpi__label {
            display: block;
            color: #8a8a8f;
            margin-bottom: 0.4rem;
        }
        .roi-kpi__value {
            font-size: 2rem;
        }
        .footer-cta {
            text-align: center;
            padding: 4rem 2rem 6rem;
        }
        @media (max-width: 768px) {
            .hero h1 {
                font-size: 2.2rem;
            }
            .roi-grid {
                grid-template-columns: 1fr;
            }
            .flip-card--overlay.is-open .flip-back {
                inset: 6vh 5vw;
            }
        }
    "#;

    html! {
        <div class="landing-page">
            <style>{page_css}</style>
            <header class="hero">
                <div class="hero__bg"></div>
                <div class="hero-content">
                    <h1>{"Every review, read. None of them by you."}</h1>
                    <p class="hero-subtitle">
                        {"Echo collects your customer reviews and turns them into a short, weekly report of what people love, what annoys them and what to fix first."}
                    </p>
                    <a href="#roi" class="hero-cta">{"See what you'd save"}</a>
                </div>
            </header>

            <section class="section before-after">
                <h2>{"Before and after Echo"}</h2>
                <div class="flip-grid">
                    <FlipCard
                        variant={FlipVariant::Overlay}
                        kicker="Before"
                        title="Reviews pile up"
                        teaser="Google, TripAdvisor and your own survey all in different tabs."
                        footnote="Most teams read fewer than one review in five."
                    >
                        <p>{"Someone opens each platform, skims the newest reviews and copies the angry ones into a spreadsheet. The patterns across hundreds of reviews never surface."}</p>
                    </FlipCard>
                    <FlipCard
                        variant={FlipVariant::Overlay}
                        kicker="After"
                        title="One report, every Monday"
                        teaser="Themes, sentiment and the three things to fix this week."
                        footnote="Reports are generated from every review, not a sample."
                    >
                        <p>{"Echo reads every new review, groups them by theme and tells you which topics are trending up or down, with quotes you can share with the team."}</p>
                    </FlipCard>
                    <FlipCard
                        variant={FlipVariant::Overlay}
                        kicker="After"
                        title="Replies that sound like you"
                        teaser="Draft answers for the reviews that need one."
                    >
                        <p>{"For every critical review Echo suggests a reply in your tone of voice. You approve, edit or skip."}</p>
                    </FlipCard>
                </div>
            </section>

            <section class="section how-it-works">
                <h2>{"How it works"}</h2>
                <div class="flip-grid">
                    <FlipCard variant={FlipVariant::Lite} kicker="1" title="Connect" teaser="Point Echo at your listing or upload a CSV export.">
                        <p>{"Search for your business by name or drop in a file with a review text column. No integration work needed."}</p>
                    </FlipCard>
                    <FlipCard variant={FlipVariant::Lite} kicker="2" title="Analyse" teaser="Echo sorts every review by theme and tone.">
                        <p>{"Each review is tagged with topics and sentiment, then rolled up month by month so you can see trends."}</p>
                    </FlipCard>
                    <FlipCard variant={FlipVariant::Lite} kicker="3" title="Act" teaser="Get the short list of what to change.">
                        <p>{"The report ends with concrete recommendations, ranked by how many customers mentioned them."}</p>
                    </FlipCard>
                </div>
            </section>

            <RoiSection />

            <footer class="footer-cta">
                <h2>{"Stop skimming. Start listening."}</h2>
                <a href="#roi" class="hero-cta">{"Try Echo on your reviews"}</a>
            </footer>
        </div>
    }
}
