use log::info;
use yew::prelude::*;

use crate::components::{
    contact_form::ContactForm, footer::Footer, info_card::InfoCard, section_title::SectionTitle,
};
use crate::contact::ContactMessage;
use crate::content::{self, Heading, Section};

#[derive(Properties, PartialEq)]
pub struct LandingProps {
    /// Where contact messages go. Delivery itself lives outside this crate.
    pub on_contact: Callback<ContactMessage>,
    /// Fired by in-page links (hero buttons, footer) before the browser follows them.
    pub on_navigate: Callback<()>,
}

#[function_component(Landing)]
pub fn landing(props: &LandingProps) -> Html {
    html! {
        <div class="landing-page">
            <Hero on_navigate={props.on_navigate.clone()} />
            { for Section::ALL.into_iter().map(|section| render_section(section, props)) }
            <Footer on_navigate={props.on_navigate.clone()} />
            <style>{LANDING_CSS}</style>
        </div>
    }
}

fn render_section(section: Section, props: &LandingProps) -> Html {
    match section {
        Section::About => html! { <About /> },
        Section::Capabilities => html! { <Capabilities /> },
        Section::Technology => html! { <Technology /> },
        Section::Achievements => html! { <Achievements /> },
        Section::Culture => html! { <Culture /> },
        Section::Contact => html! { <Contact on_submit={props.on_contact.clone()} /> },
    }
}

/// Logs the submission and drops it; nothing is delivered yet.
pub fn log_contact_handoff() -> Callback<ContactMessage> {
    Callback::from(|message: ContactMessage| {
        info!(
            "Contact message from {} <{}> ({} chars)",
            message.name,
            message.email,
            message.message.chars().count()
        );
    })
}

fn title(heading: &Heading, light: bool) -> Html {
    html! {
        <SectionTitle
            title={heading.title}
            subtitle={Some(AttrValue::from(heading.subtitle))}
            {light}
        />
    }
}

#[derive(Properties, PartialEq)]
struct HeroProps {
    on_navigate: Callback<()>,
}

#[function_component(Hero)]
fn hero(props: &HeroProps) -> Html {
    let hero = &content::HERO;
    let follow = props.on_navigate.reform(|_: MouseEvent| ());
    let background = format!("background-image: url('{}');", hero.background);

    html! {
        <section class="hero">
            <div class="hero__background" style={background}>
                <div class="hero__shade"></div>
            </div>
            <div class="container hero__content">
                <span class="hero__badge">{hero.badge}</span>
                <h1>
                    {hero.title}<br />
                    <span class="hero__accent">{hero.title_accent}</span>
                </h1>
                <p class="hero__lead">{hero.lead}</p>
                <div class="hero__ctas">
                    <a href={hero.primary_cta.1.href()} class="btn btn--primary" onclick={follow.clone()}>{hero.primary_cta.0}</a>
                    <a href={hero.secondary_cta.1.href()} class="btn btn--outline" onclick={follow}>{hero.secondary_cta.0}</a>
                </div>
            </div>
        </section>
    }
}

#[function_component(About)]
fn about() -> Html {
    html! {
        <section id={Section::About.id()} class="section section--white">
            <div class="container">
                { title(&content::ABOUT_HEADING, false) }
                <div class="about-grid">
                    <div>
                        <p class="about__lead">{content::ABOUT_SITE}</p>
                        <div class="highlights">
                            { for content::HIGHLIGHTS.iter().map(|h| html! {
                                <div class="highlight" key={h.value}>
                                    <div class={classes!("icon-badge", h.accent.class())}>{h.icon}</div>
                                    <div>
                                        <p class="highlight__value">{h.value}</p>
                                        <p class="highlight__caption">{h.caption}</p>
                                    </div>
                                </div>
                            }) }
                        </div>
                    </div>
                    <div class="about__media">
                        <img src={content::ABOUT_IMAGE} alt={content::ABOUT_IMAGE_ALT} loading="lazy" />
                        <div class="about__quote">
                            <p class="about__quote-label">{content::LOCATION_LABEL}</p>
                            <p class="about__quote-text">{content::LOCATION_QUOTE}</p>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[function_component(Capabilities)]
fn capabilities() -> Html {
    html! {
        <section id={Section::Capabilities.id()} class="section section--muted">
            <div class="container">
                { title(&content::CAPABILITIES_HEADING, false) }
                <div class="grid grid--3">
                    { for content::CAPABILITIES.iter().map(|c| html! {
                        <InfoCard key={c.title} icon={c.icon} title={c.title}>
                            {c.body}
                        </InfoCard>
                    }) }
                </div>
            </div>
        </section>
    }
}

#[function_component(Technology)]
fn technology() -> Html {
    html! {
        <section id={Section::Technology.id()} class="section section--brand">
            <div class="container">
                { title(&content::TECHNOLOGY_HEADING, true) }
                <div class="grid grid--2">
                    <div class="glass-panel">
                        <h3><span class="chevron">{"›"}</span>{content::CONFIGURATION_TITLE}</h3>
                        <ul class="units">
                            { for content::CONFIGURATION_UNITS.iter().map(|(unit, text)| html! {
                                <li key={*unit}>
                                    <span class="dot"></span>
                                    <span><strong>{*unit}</strong>{" "}{*text}</span>
                                </li>
                            }) }
                        </ul>
                        <div class="cycle">
                            <p class="cycle__label">{content::CYCLE_LABEL}</p>
                            <p class="cycle__text">{content::CYCLE_TEXT}</p>
                        </div>
                    </div>
                    <div class="glass-panel">
                        <h3><span class="chevron">{"›"}</span>{content::FOUNDATION_TITLE}</h3>
                        <p class="foundation__intro">
                            {content::FOUNDATION_INTRO}{" "}
                            <strong>{content::FOUNDATION_TECHNIQUE}</strong>{"."}
                        </p>
                        <div class="benefits">
                            { for content::FOUNDATION_BENEFITS.iter().enumerate().map(|(i, benefit)| html! {
                                <div class="benefit" key={*benefit}>
                                    <span class="benefit__index">{format!("{:02}", i + 1)}</span>
                                    <span>{*benefit}</span>
                                </div>
                            }) }
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[function_component(Achievements)]
fn achievements() -> Html {
    html! {
        <section id={Section::Achievements.id()} class="section section--white">
            <div class="container">
                { title(&content::ACHIEVEMENTS_HEADING, false) }
                <div class="grid grid--4 stats">
                    { for content::STATS.iter().map(|s| html! {
                        <div class={classes!("stat", s.accent.class())} key={s.label}>
                            <p class="stat__value">{s.value}</p>
                            <p class="stat__label">{s.label}</p>
                        </div>
                    }) }
                </div>
                <div class="awards">
                    { for content::AWARDS.iter().map(|a| html! {
                        <div class="award" key={a.title}>
                            <div class={classes!("award__icon", a.accent.class())}>{"🏅"}</div>
                            <div>
                                <h4>{a.title}</h4>
                                <p>{a.note}</p>
                            </div>
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}

#[function_component(Culture)]
fn culture() -> Html {
    html! {
        <section id={Section::Culture.id()} class="section section--dark">
            <div class="container">
                { title(&content::CULTURE_HEADING, true) }
                <div class="grid grid--2">
                    <div>
                        <h3 class="standards__title">{content::STANDARDS_TITLE}</h3>
                        <div class="standards">
                            { for content::STANDARDS.iter().map(|s| html! {
                                <div class="standard" key={s.code}>
                                    <div class={classes!("standard__icon", s.accent.class())}>{"🛡️"}</div>
                                    <div>
                                        <h4>{s.code}</h4>
                                        <p>{s.scope}</p>
                                    </div>
                                </div>
                            }) }
                        </div>
                    </div>
                    <div class="culture-card">
                        <h3>{content::CULTURE_MOTTO}</h3>
                        <p class="culture-card__values">
                            {content::CORE_VALUES_INTRO}{" "}
                            <strong>{content::CORE_VALUES}</strong>
                        </p>
                        <div class="culture-card__points">
                            { for content::CULTURE_POINTS.iter().map(|point| html! {
                                <p key={*point}>{format!("• {}", point)}</p>
                            }) }
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct ContactProps {
    on_submit: Callback<ContactMessage>,
}

#[function_component(Contact)]
fn contact(props: &ContactProps) -> Html {
    html! {
        <section id={Section::Contact.id()} class="section section--white">
            <div class="container">
                { title(&content::CONTACT_HEADING, false) }
                <div class="grid grid--2 contact-grid">
                    <div class="channels">
                        { for content::CONTACT_CHANNELS.iter().map(|c| html! {
                            <div class="channel" key={c.label}>
                                <div class={classes!("channel__icon", c.accent.class())}>{c.icon}</div>
                                <div>
                                    <h4>{c.label}</h4>
                                    <p>{c.value}</p>
                                </div>
                            </div>
                        }) }
                    </div>
                    <ContactForm on_submit={props.on_submit.clone()} />
                </div>
            </div>
        </section>
    }
}

const LANDING_CSS: &str = r#"
:root {
    --pv-blue: #0054a6;
    --pv-red: #e31e24;
}

html {
    scroll-behavior: smooth;
}

body {
    margin: 0;
    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
    color: #1e293b;
}

.container {
    max-width: 1280px;
    margin: 0 auto;
    padding: 0 1.5rem;
    box-sizing: border-box;
}

.section { padding: 6rem 0; }
.section--white { background: #ffffff; }
.section--muted { background: #f8fafc; }
.section--brand { background: var(--pv-blue); color: #ffffff; position: relative; overflow: hidden; }
.section--dark { background: #0f172a; color: #ffffff; }

.section-title {
    text-align: center;
    margin-bottom: 3rem;
}

.section-title h2 {
    font-size: 2.25rem;
    font-weight: 700;
    margin: 0 0 1rem;
    color: #1e293b;
}

.section-title__bar {
    height: 6px;
    width: 6rem;
    margin: 0 auto 1rem;
    background: var(--pv-red);
    border-radius: 9999px;
}

.section-title p {
    max-width: 42rem;
    margin: 0 auto;
    font-size: 1.125rem;
    color: #475569;
}

.section-title--light h2 { color: #ffffff; }
.section-title--light p { color: #e2e8f0; }

.grid { display: grid; gap: 2rem; }

.accent--blue { background: #eff6ff; color: var(--pv-blue); border-color: var(--pv-blue); }
.accent--red { background: #fef2f2; color: var(--pv-red); border-color: var(--pv-red); }
.accent--green { background: #f0fdf4; color: #15803d; border-color: #15803d; }
.accent--yellow { background: #fefce8; color: #a16207; border-color: #a16207; }

.btn {
    padding: 1rem 2rem;
    font-weight: 700;
    border-radius: 4px;
    text-align: center;
    text-decoration: none;
    transition: all 0.3s ease;
}

.btn--primary { background: var(--pv-red); color: #ffffff; }
.btn--primary:hover { background: #b91c1c; }
.btn--outline { border: 2px solid #ffffff; color: #ffffff; }
.btn--outline:hover { background: #ffffff; color: #0f172a; }

.hero {
    position: relative;
    height: 100vh;
    display: flex;
    align-items: center;
    overflow: hidden;
}

.hero__background {
    position: absolute;
    inset: 0;
    background-size: cover;
    background-position: center;
}

.hero__shade {
    position: absolute;
    inset: 0;
    background: linear-gradient(to right, rgba(0, 0, 0, 0.8), rgba(0, 0, 0, 0.4));
}

.hero__content {
    position: relative;
    z-index: 10;
    padding-top: 5rem;
    color: #ffffff;
    width: 100%;
}

.hero__badge {
    display: inline-block;
    padding: 0.25rem 1rem;
    background: var(--pv-red);
    font-size: 0.875rem;
    font-weight: 700;
    text-transform: uppercase;
    letter-spacing: 0.1em;
    margin-bottom: 1.5rem;
}

.hero h1 {
    font-size: 3.75rem;
    line-height: 1.1;
    margin: 0 0 1.5rem;
}

.hero__accent { color: var(--pv-red); }

.hero__lead {
    font-size: 1.5rem;
    max-width: 42rem;
    color: #e2e8f0;
    line-height: 1.6;
    margin-bottom: 2.5rem;
}

.hero__ctas {
    display: flex;
    flex-wrap: wrap;
    gap: 1rem;
}

.about-grid {
    display: grid;
    gap: 4rem;
    align-items: center;
}

.about__lead {
    font-size: 1.125rem;
    color: #475569;
    line-height: 1.7;
}

.highlights {
    display: grid;
    gap: 1.5rem;
    padding-top: 1rem;
}

.highlight {
    display: flex;
    align-items: flex-start;
    gap: 1rem;
}

.highlight p { margin: 0; }
.highlight__value { font-weight: 700; }
.highlight__caption { font-size: 0.875rem; color: #64748b; }

.icon-badge {
    padding: 0.75rem;
    border-radius: 8px;
    font-size: 1.5rem;
}

.about__media { position: relative; }

.about__media img {
    width: 100%;
    border-radius: 1rem;
    box-shadow: 0 25px 50px rgba(0, 0, 0, 0.25);
}

.about__quote {
    display: none;
    position: absolute;
    bottom: -1.5rem;
    left: -1.5rem;
    max-width: 20rem;
    background: var(--pv-blue);
    color: #ffffff;
    padding: 2rem;
    border-radius: 12px;
}

.about__quote-label {
    font-size: 0.875rem;
    opacity: 0.8;
    text-transform: uppercase;
}

.about__quote-text {
    font-size: 1.125rem;
    font-style: italic;
}

.info-card {
    background: #ffffff;
    padding: 2rem;
    border-radius: 12px;
    border: 1px solid #f1f5f9;
    box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);
    height: 100%;
    box-sizing: border-box;
    transition: box-shadow 0.3s ease;
}

.info-card:hover { box-shadow: 0 4px 12px rgba(0, 0, 0, 0.1); }
.info-card__icon { font-size: 2rem; margin-bottom: 1rem; }
.info-card h3 { font-size: 1.25rem; margin: 0 0 0.75rem; }
.info-card__body { color: #475569; line-height: 1.6; }

.glass-panel {
    background: rgba(255, 255, 255, 0.1);
    padding: 2rem;
    border-radius: 1rem;
    backdrop-filter: blur(4px);
}

.glass-panel h3 {
    font-size: 1.5rem;
    display: flex;
    align-items: center;
    gap: 0.5rem;
}

.chevron { color: var(--pv-red); font-size: 2rem; }

.units {
    list-style: none;
    padding: 0;
    color: #e2e8f0;
}

.units li {
    display: flex;
    gap: 0.75rem;
    align-items: flex-start;
    margin-bottom: 1rem;
}

.units strong { color: #ffffff; }

.dot {
    margin-top: 0.4rem;
    width: 8px;
    height: 8px;
    border-radius: 50%;
    background: var(--pv-red);
    flex-shrink: 0;
}

.cycle {
    margin-top: 2rem;
    padding-top: 2rem;
    border-top: 1px solid rgba(255, 255, 255, 0.2);
}

.cycle__label {
    font-size: 0.875rem;
    font-weight: 700;
    text-transform: uppercase;
    letter-spacing: 0.1em;
    color: var(--pv-red);
}

.cycle__text { font-size: 1.125rem; }

.foundation__intro { color: #e2e8f0; line-height: 1.6; }
.foundation__intro strong { color: #ffffff; }

.benefit {
    display: flex;
    align-items: center;
    gap: 1rem;
    background: rgba(255, 255, 255, 0.05);
    padding: 1rem;
    border-radius: 8px;
    margin-bottom: 1rem;
}

.benefit__index {
    color: var(--pv-red);
    font-weight: 700;
    font-size: 1.25rem;
}

.stats { margin-bottom: 4rem; }

.stat {
    padding: 2rem;
    border-left: 4px solid;
    background: #f8fafc;
    text-align: center;
}

.stat__value { font-size: 2.25rem; font-weight: 700; margin: 0 0 0.5rem; }
.stat__label { color: #475569; font-weight: 500; margin: 0; }

.awards {
    max-width: 56rem;
    margin: 0 auto;
    display: flex;
    flex-direction: column;
    gap: 1rem;
}

.award {
    display: flex;
    align-items: center;
    gap: 1.5rem;
    padding: 1rem;
    border: 1px solid #f1f5f9;
    border-radius: 8px;
    box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);
}

.award__icon {
    width: 4rem;
    height: 4rem;
    flex-shrink: 0;
    border-radius: 50%;
    display: flex;
    align-items: center;
    justify-content: center;
    font-size: 2rem;
}

.award h4 { margin: 0; }
.award p { margin: 0.25rem 0 0; font-size: 0.875rem; color: #64748b; }

.standards__title {
    font-size: 1.5rem;
    color: var(--pv-red);
    margin-bottom: 2rem;
}

.standard {
    display: flex;
    gap: 1rem;
    margin-bottom: 1.5rem;
}

.standard__icon {
    width: 3rem;
    height: 3rem;
    flex-shrink: 0;
    border-radius: 4px;
    display: flex;
    align-items: center;
    justify-content: center;
    background: rgba(255, 255, 255, 0.1);
}

.standard h4 { margin: 0 0 0.25rem; font-size: 1.125rem; }
.standard p { margin: 0; color: #94a3b8; font-size: 0.875rem; }

.culture-card {
    background: #ffffff;
    color: #0f172a;
    padding: 2rem;
    border-radius: 1rem;
    box-shadow: 0 20px 25px rgba(0, 0, 0, 0.2);
}

.culture-card h3 {
    font-size: 1.5rem;
    color: var(--pv-blue);
    font-style: italic;
}

.culture-card__values { font-size: 1.125rem; line-height: 1.6; }
.culture-card__values strong { color: var(--pv-blue); }
.culture-card__points { color: #475569; }

.channel {
    display: flex;
    align-items: center;
    gap: 1.5rem;
    margin-bottom: 2rem;
}

.channel__icon {
    width: 3.5rem;
    height: 3.5rem;
    flex-shrink: 0;
    border-radius: 50%;
    display: flex;
    align-items: center;
    justify-content: center;
    font-size: 1.5rem;
}

.channel h4 {
    margin: 0;
    font-size: 0.875rem;
    text-transform: uppercase;
    letter-spacing: 0.05em;
}

.channel p { margin: 0.25rem 0 0; color: #475569; }

.contact-form {
    background: #f8fafc;
    padding: 2rem;
    border-radius: 1rem;
    border: 1px solid #f1f5f9;
}

.contact-form__fields {
    display: grid;
    gap: 1rem;
    margin-bottom: 1rem;
}

.contact-form input,
.contact-form textarea {
    padding: 1rem;
    border-radius: 8px;
    border: 1px solid #e2e8f0;
    font: inherit;
}

.contact-form input:focus,
.contact-form textarea:focus {
    outline: none;
    box-shadow: 0 0 0 2px var(--pv-blue);
}

.contact-form__submit {
    width: 100%;
    padding: 1rem;
    background: var(--pv-blue);
    color: #ffffff;
    font-weight: 700;
    border: none;
    border-radius: 4px;
    cursor: pointer;
    transition: background 0.2s ease;
}

.contact-form__submit:hover { background: #1e293b; }

.site-footer {
    background: #0f172a;
    padding: 3rem 0;
    color: #94a3b8;
    border-top: 1px solid rgba(255, 255, 255, 0.05);
}

.site-footer__top {
    display: flex;
    flex-direction: column;
    align-items: center;
    gap: 2rem;
    margin-bottom: 3rem;
}

.site-footer__brand { display: flex; align-items: center; gap: 0.5rem; }

.site-footer__mark {
    background: var(--pv-blue);
    color: #ffffff;
    padding: 0.25rem;
    border-radius: 4px;
    font-weight: 700;
    font-size: 1.125rem;
}

.site-footer__name { font-weight: 700; color: #ffffff; line-height: 1.2; }
.site-footer__name span { font-size: 0.75rem; font-weight: 500; }

.site-footer__links { display: flex; gap: 2rem; }
.site-footer__links a { color: inherit; text-decoration: none; transition: color 0.2s ease; }
.site-footer__links a:hover { color: #ffffff; }

.site-footer__legal {
    text-align: center;
    padding-top: 2rem;
    border-top: 1px solid rgba(255, 255, 255, 0.05);
    font-size: 0.875rem;
}

.site-footer__note { font-size: 0.75rem; font-style: italic; }

@media (min-width: 768px) {
    .grid--2 { grid-template-columns: repeat(2, 1fr); }
    .grid--3 { grid-template-columns: repeat(3, 1fr); }
    .grid--4 { grid-template-columns: repeat(2, 1fr); }
    .about-grid { grid-template-columns: repeat(2, 1fr); }
    .highlights { grid-template-columns: repeat(2, 1fr); }
    .site-footer__top { flex-direction: row; justify-content: space-between; }
}

@media (min-width: 1024px) {
    .grid--4 { grid-template-columns: repeat(4, 1fr); }
    .about__quote { display: block; }
    .hero h1 { font-size: 4.5rem; }
}

@media (max-width: 768px) {
    .hero h1 { font-size: 2.25rem; }
    .hero__lead { font-size: 1.25rem; }
}
"#;
