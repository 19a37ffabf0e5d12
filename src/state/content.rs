//! Static copy for the salon: services, testimonials, FAQ, home sections

/// One bookable reading
#[derive(Debug, Clone, Copy)]
pub struct Service {
    pub name: &'static str,
    pub price: f64,
    pub description: &'static str,
}

pub const SERVICES: &[Service] = &[
    Service {
        name: "Full Tarot Reading",
        price: 45.0,
        description: "A complete 78-card spread covering love, work and personal growth.",
    },
    Service {
        name: "Love & Relationships",
        price: 35.0,
        description: "A focused spread on the questions of the heart.",
    },
    Service {
        name: "Career Guidance",
        price: 40.0,
        description: "Clarity on professional crossroads and upcoming opportunities.",
    },
    Service {
        name: "Annual Forecast",
        price: 60.0,
        description: "A card for every month of the year ahead, with a written summary.",
    },
];

/// One testimonial slide
#[derive(Debug, Clone, Copy)]
pub struct Testimonial {
    pub author: &'static str,
    pub quote: &'static str,
}

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        author: "Carmen R.",
        quote: "Luna's reading gave me the clarity I had been missing for months. \
                I left the session feeling lighter than I have in years.",
    },
    Testimonial {
        author: "Javier M.",
        quote: "I was skeptical, but the career spread described my situation with \
                uncanny precision. I have already booked my annual forecast.",
    },
    Testimonial {
        author: "Sofia T.",
        quote: "Warm, honest and never vague. The love reading helped me ask the \
                right questions instead of handing me easy answers.",
    },
    Testimonial {
        author: "Andrea L.",
        quote: "The annual forecast has become my January ritual. Twelve months \
                later I am always surprised how much of it resonated.",
    },
];

/// One FAQ entry
#[derive(Debug, Clone, Copy)]
pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

pub const FAQ_ENTRIES: &[FaqEntry] = &[
    FaqEntry {
        question: "Do I need to prepare anything before a reading?",
        answer: "No preparation is needed. Arriving with an open mind and, if you \
                 like, a question or two you care about is more than enough.",
    },
    FaqEntry {
        question: "How long does a session last?",
        answer: "A full reading takes about an hour. Focused spreads such as the \
                 love or career reading usually finish within forty minutes.",
    },
    FaqEntry {
        question: "Can a reading be done remotely?",
        answer: "Yes. Remote sessions are held over video call and follow exactly \
                 the same structure as an in-person reading.",
    },
    FaqEntry {
        question: "Will you tell me my future?",
        answer: "Tarot does not dictate a fixed future. A reading maps the energies \
                 around a situation so you can make your own informed choices.",
    },
    FaqEntry {
        question: "How do I pay for a reservation?",
        answer: "Payment is taken at the salon, in cash or by card. A reservation \
                 request carries no charge and can be cancelled freely.",
    },
];

/// One section of the home page, addressable as a scroll anchor
#[derive(Debug, Clone, Copy)]
pub struct HomeSection {
    pub title: &'static str,
    pub body: &'static [&'static str],
}

pub const HOME_SECTIONS: &[HomeSection] = &[
    HomeSection {
        title: "Welcome to Mystica",
        body: &[
            "A quiet corner of the city where the cards have been read",
            "for over twenty years. Step in, slow down, and listen to",
            "what the moment has to say.",
        ],
    },
    HomeSection {
        title: "About Luna",
        body: &[
            "Luna learned the tarot from her grandmother in Seville and",
            "has guided seekers through its arcana ever since. Her",
            "readings are warm, direct, and grounded in the everyday.",
        ],
    },
    HomeSection {
        title: "Our readings",
        body: &[
            "From a single pressing question to a forecast for the whole",
            "year, every session is shaped around you. Browse the",
            "services page to find the spread that fits.",
        ],
    },
    HomeSection {
        title: "Visit us",
        body: &[
            "Calle de la Luna 13, Madrid. Open Tuesday to Saturday,",
            "from four in the afternoon until ten at night. Walk-ins",
            "are welcome when the candle in the window is lit.",
        ],
    },
];

/// Rows one section occupies when rendered: title, underline, body, spacer
fn section_height(section: &HomeSection) -> u16 {
    2 + section.body.len() as u16 + 1
}

/// Top row of a home section within the rendered page
pub fn home_section_row(index: usize) -> u16 {
    HOME_SECTIONS
        .iter()
        .take(index)
        .map(section_height)
        .sum()
}

/// Total rendered height of the home page
pub fn home_page_height() -> u16 {
    HOME_SECTIONS.iter().map(section_height).sum()
}
