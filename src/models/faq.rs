use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FaqEntry {
    pub title: &'static str,
    pub content: &'static str,
}

const FAQ_ENTRIES: [FaqEntry; 5] = [
    FaqEntry {
        title: "Is it possible to engage a financial advisor if I don't have a substantial amount of disposable income?",
        content: "Yes, everyone can benefit from financial advising. We help you make confident financial decisions, regardless of your income level.",
    },
    FaqEntry {
        title: "Can you help make my investments more secure?",
        content: "We work with you to balance risk and reward, ensuring your investments support your long-term goals.",
    },
    FaqEntry {
        title: "Could you please review my portfolio?",
        content: "Regular portfolio reviews keep your financial direction aligned. We conduct a full Financial Needs Analysis for your entire portfolio.",
    },
    FaqEntry {
        title: "What kind of kids' education plans do you offer?",
        content: "We estimate future education costs and recommend personalized financial products to match your family's goals.",
    },
    FaqEntry {
        title: "Do you provide assistance with life insurance?",
        content: "Life insurance is essential for long-term family security, asset protection, and estate planning. We guide you through it all.",
    },
];

pub fn faq_entries() -> &'static [FaqEntry] {
    &FAQ_ENTRIES
}
