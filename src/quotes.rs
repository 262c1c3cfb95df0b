use crate::models::Quote;
use rand::seq::SliceRandom;
use rand::Rng;

pub const QUOTES: [Quote; 7] = [
    Quote {
        text: "Discipline is choosing between what you want now and what you want most.",
        author: "Abraham Lincoln",
    },
    Quote {
        text: "Success is nothing more than a few simple disciplines, practiced every day.",
        author: "Jim Rohn",
    },
    Quote {
        text: "Discipline is the bridge between goals and accomplishment.",
        author: "Jim Rohn",
    },
    Quote {
        text: "We must all suffer one of two things: the pain of discipline or the pain of regret.",
        author: "Jim Rohn",
    },
    Quote {
        text: "Discipline is doing what needs to be done, even when you don't want to do it.",
        author: "Unknown",
    },
    Quote {
        text: "The pain of discipline is far less than the pain of regret.",
        author: "Sarah Bombell",
    },
    Quote {
        text: "Motivation gets you going, but discipline keeps you growing.",
        author: "John C. Maxwell",
    },
];

pub fn pick<R: Rng + ?Sized>(rng: &mut R) -> Quote {
    QUOTES.choose(rng).copied().unwrap_or(QUOTES[0])
}

pub fn pick_random() -> Quote {
    pick(&mut rand::thread_rng())
}
