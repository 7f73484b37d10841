use leptos::*;

use crate::components::accordion::Accordion;
use crate::components::section::Section;

const GALLERY_IMAGES: [&str; 4] = [
    "https://images.unsplash.com/photo-1554048612-b6a482bc67e5?auto=format&fit=crop&w=800&q=80",
    "https://images.unsplash.com/photo-1520854221256-17451cc331bf?auto=format&fit=crop&w=800&q=80",
    "https://images.unsplash.com/photo-1493863641943-9b68992a8d07?auto=format&fit=crop&w=800&q=80",
    "https://images.unsplash.com/photo-1505934801784-b6e4ccbbfb03?auto=format&fit=crop&w=800&q=80",
];

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <section class="hero">
            <h1 class="hero-title">"סטודיו לצילום אלפא"</h1>
            <p class="hero-subtitle">
                "סטודיו לצילום מוביל המספק שירות מקצועי ואיכותי. הזמינו תור עוד היום!"
            </p>
        </section>

        <Section id="services" title="שירותים">
            <div class="service-grid">
                <div class="service-card">
                    <h3>"צילומי פורטרט"</h3>
                    <p>"צילומי פורטרט אישיים ומשפחתיים בסטודיו או בחוץ."</p>
                </div>
                <div class="service-card">
                    <h3>"צילום אירועים"</h3>
                    <p>"תיעוד מלא של חתונות, בר מצוות ואירועים עסקיים."</p>
                </div>
                <div class="service-card">
                    <h3>"צילום מוצרים"</h3>
                    <p>"צילומי קטלוג ומוצרים לעסקים וחנויות אונליין."</p>
                </div>
            </div>
        </Section>

        <Section id="gallery" title="גלריה">
            <div class="gallery-grid">
                {GALLERY_IMAGES
                    .iter()
                    .map(|url| {
                        view! {
                            <img class="gallery-image" src=*url alt="צילום מתוך הגלריה" />
                        }
                    })
                    .collect_view()}
            </div>
        </Section>

        <Section id="testimonials" title="המלצות">
            <blockquote class="testimonial">
                "שירות מדהים ותמונות מושלמות. ממליצים בחום!"
                <cite>"— משפחת לוי"</cite>
            </blockquote>
            <blockquote class="testimonial">
                "הצוות המקצועי ביותר שעבדנו איתו. התוצאות עלו על כל הציפיות."
                <cite>"— דנה כהן"</cite>
            </blockquote>
        </Section>

        <Section id="about" title="אודות">
            <p>
                "סטודיו לצילום אלפא פועל למעלה מעשור ומתמחה בצילומי פורטרט, "
                "אירועים ומוצרים. אנחנו מאמינים שכל רגע ראוי לתיעוד מקצועי."
            </p>
        </Section>

        <Section id="faq" title="שאלות נפוצות">
            <Accordion summary="כמה זמן לוקח לקבל את התמונות?">
                <p>"התמונות הערוכות נמסרות תוך שבועיים מיום הצילום."</p>
            </Accordion>
            <Accordion summary="האם אפשר לצלם מחוץ לסטודיו?">
                <p>"בהחלט. אנחנו מצלמים גם בלוקיישנים לבחירתכם ברחבי הארץ."</p>
            </Accordion>
            <Accordion summary="איך קובעים תור?">
                <p>"ניתן ליצור קשר בטלפון או במייל ונשמח לתאם מועד."</p>
            </Accordion>
        </Section>

        <Section id="contact" title="צור קשר">
            <ul class="contact-list">
                <li>
                    <a href="tel:+97235555555">"03-5555555"</a>
                </li>
                <li>
                    <a href="mailto:studio@alpha-photography.com">
                        "studio@alpha-photography.com"
                    </a>
                </li>
                <li>"רחוב הצלמים 12, תל אביב"</li>
            </ul>
        </Section>
    }
}
