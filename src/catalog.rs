//! Static translation tables, one per language.
//!
//! English is the fallback table and defines every key; the other tables may
//! be partial. Lookups that miss everywhere resolve to the key itself, so a
//! missing translation is never an error, just untranslated text on screen.

use crate::language::Language;

/// Look up `key` in the table for `lang`. Returns `None` when the table does
/// not define the key; callers chain to the English table themselves.
pub(crate) fn lookup(lang: Language, key: &str) -> Option<&'static str> {
    match lang {
        Language::English => en(key),
        Language::Hindi => hi(key),
        Language::Malayalam => ml(key),
        Language::Telugu => te(key),
        Language::Tamil => ta(key),
        Language::Kannada => kn(key),
        Language::Marathi => mr(key),
        Language::Bengali => bn(key),
    }
}

/// Checked constants for every key the English table defines. Callers should
/// prefer these over raw strings so a typo fails at compile time instead of
/// rendering the key verbatim.
pub mod keys {
    // Header
    pub const NAV_HOME: &str = "nav.home";
    pub const NAV_SCHEMES: &str = "nav.schemes";
    pub const NAV_CLIMATE: &str = "nav.climate";
    pub const NAV_DISEASE_DETECTION: &str = "nav.disease-detection";
    pub const NAV_VOICE_SUPPORT: &str = "nav.voice-support";
    pub const NAV_CONTACT: &str = "nav.contact";
    pub const NAV_GET_STARTED: &str = "nav.get-started";
    pub const NAV_LANGUAGE: &str = "nav.language";

    // Hero section
    pub const HERO_TITLE: &str = "hero.title";
    pub const HERO_TITLE_HIGHLIGHT: &str = "hero.title.highlight";
    pub const HERO_DESCRIPTION: &str = "hero.description";
    pub const HERO_GET_STARTED: &str = "hero.get-started";
    pub const HERO_LEARN_MORE: &str = "hero.learn-more";

    // Features section
    pub const FEATURES_TITLE: &str = "features.title";
    pub const FEATURES_DESCRIPTION: &str = "features.description";
    pub const FEATURES_SCHEMES_TITLE: &str = "features.schemes.title";
    pub const FEATURES_SCHEMES_DESCRIPTION: &str = "features.schemes.description";
    pub const FEATURES_SCHEMES_BUTTON: &str = "features.schemes.button";
    pub const FEATURES_CLIMATE_TITLE: &str = "features.climate.title";
    pub const FEATURES_CLIMATE_DESCRIPTION: &str = "features.climate.description";
    pub const FEATURES_CLIMATE_BUTTON: &str = "features.climate.button";
    pub const FEATURES_DISEASE_TITLE: &str = "features.disease.title";
    pub const FEATURES_DISEASE_DESCRIPTION: &str = "features.disease.description";
    pub const FEATURES_DISEASE_BUTTON: &str = "features.disease.button";
    pub const FEATURES_VOICE_TITLE: &str = "features.voice.title";
    pub const FEATURES_VOICE_DESCRIPTION: &str = "features.voice.description";
    pub const FEATURES_VOICE_BUTTON: &str = "features.voice.button";
    pub const FEATURES_BUDGET_TITLE: &str = "features.budget.title";
    pub const FEATURES_BUDGET_DESCRIPTION: &str = "features.budget.description";
    pub const FEATURES_BUDGET_BUTTON: &str = "features.budget.button";
    pub const FEATURES_GARDENING_TITLE: &str = "features.gardening.title";
    pub const FEATURES_GARDENING_DESCRIPTION: &str = "features.gardening.description";
    pub const FEATURES_GARDENING_BUTTON: &str = "features.gardening.button";

    // Language support section
    pub const LANGUAGE_TITLE: &str = "language.title";
    pub const LANGUAGE_DESCRIPTION: &str = "language.description";
    pub const LANGUAGE_SUPPORT_TEXT: &str = "language.support-text";

    // Footer
    pub const FOOTER_DESCRIPTION: &str = "footer.description";
    pub const FOOTER_COMMERCIAL: &str = "footer.commercial";
    pub const FOOTER_MULTILINGUAL: &str = "footer.multilingual";
    pub const FOOTER_QUICK_LINKS: &str = "footer.quick-links";
    pub const FOOTER_CONTACT: &str = "footer.contact";
    pub const FOOTER_COPYRIGHT: &str = "footer.copyright";

    // Common
    pub const COMMON_LOADING: &str = "common.loading";
    pub const COMMON_ERROR: &str = "common.error";
    pub const COMMON_SUCCESS: &str = "common.success";
    pub const COMMON_CANCEL: &str = "common.cancel";
    pub const COMMON_SAVE: &str = "common.save";
    pub const COMMON_CLOSE: &str = "common.close";

    /// Every key above, for completeness checks.
    pub const ALL: &[&str] = &[
        NAV_HOME,
        NAV_SCHEMES,
        NAV_CLIMATE,
        NAV_DISEASE_DETECTION,
        NAV_VOICE_SUPPORT,
        NAV_CONTACT,
        NAV_GET_STARTED,
        NAV_LANGUAGE,
        HERO_TITLE,
        HERO_TITLE_HIGHLIGHT,
        HERO_DESCRIPTION,
        HERO_GET_STARTED,
        HERO_LEARN_MORE,
        FEATURES_TITLE,
        FEATURES_DESCRIPTION,
        FEATURES_SCHEMES_TITLE,
        FEATURES_SCHEMES_DESCRIPTION,
        FEATURES_SCHEMES_BUTTON,
        FEATURES_CLIMATE_TITLE,
        FEATURES_CLIMATE_DESCRIPTION,
        FEATURES_CLIMATE_BUTTON,
        FEATURES_DISEASE_TITLE,
        FEATURES_DISEASE_DESCRIPTION,
        FEATURES_DISEASE_BUTTON,
        FEATURES_VOICE_TITLE,
        FEATURES_VOICE_DESCRIPTION,
        FEATURES_VOICE_BUTTON,
        FEATURES_BUDGET_TITLE,
        FEATURES_BUDGET_DESCRIPTION,
        FEATURES_BUDGET_BUTTON,
        FEATURES_GARDENING_TITLE,
        FEATURES_GARDENING_DESCRIPTION,
        FEATURES_GARDENING_BUTTON,
        LANGUAGE_TITLE,
        LANGUAGE_DESCRIPTION,
        LANGUAGE_SUPPORT_TEXT,
        FOOTER_DESCRIPTION,
        FOOTER_COMMERCIAL,
        FOOTER_MULTILINGUAL,
        FOOTER_QUICK_LINKS,
        FOOTER_CONTACT,
        FOOTER_COPYRIGHT,
        COMMON_LOADING,
        COMMON_ERROR,
        COMMON_SUCCESS,
        COMMON_CANCEL,
        COMMON_SAVE,
        COMMON_CLOSE,
    ];
}

// ── English (complete, fallback table) ────────────────────────────

#[allow(clippy::too_many_lines)]
fn en(key: &str) -> Option<&'static str> {
    Some(match key {
        // Header
        "nav.home" => "Home",
        "nav.schemes" => "Schemes",
        "nav.climate" => "Climate",
        "nav.disease-detection" => "Disease Detection",
        "nav.voice-support" => "Voice Support",
        "nav.contact" => "Contact",
        "nav.get-started" => "Get Started",
        "nav.language" => "Language",

        // Hero section
        "hero.title" => "Smart Farming for",
        "hero.title.highlight" => "Better Harvests",
        "hero.description" => "AI-powered support system for farmers with government schemes, climate predictions, disease recognition, and personalized recommendations based on your needs and budget.",
        "hero.get-started" => "Get Started",
        "hero.learn-more" => "Learn More",

        // Features section
        "features.title" => "Comprehensive Farming Solutions",
        "features.description" => "Everything you need to make informed farming decisions, from government support to AI-powered insights for sustainable agriculture.",
        "features.schemes.title" => "Government Schemes",
        "features.schemes.description" => "Access MSP schemes, central & state government loans, subsidies on pesticides and farming equipment.",
        "features.schemes.button" => "View Schemes",
        "features.climate.title" => "Climate Predictions",
        "features.climate.description" => "Get AI-powered weather forecasts and climate insights to plan your crops effectively for better yields.",
        "features.climate.button" => "Check Weather",
        "features.disease.title" => "Disease Detection",
        "features.disease.description" => "Upload plant images and detect diseases instantly with AI-powered analysis for immediate treatment recommendations.",
        "features.disease.button" => "Upload Plant Image",
        "features.voice.title" => "Voice Support",
        "features.voice.description" => "Ask questions in your own language and get instant AI-powered answers. Supports multiple regional languages.",
        "features.voice.button" => "Try Voice Support",
        "features.budget.title" => "Budget Planning",
        "features.budget.description" => "Get personalized recommendations based on your budget and farming needs for optimal resource allocation.",
        "features.budget.button" => "Plan Budget",
        "features.gardening.title" => "Home Gardening",
        "features.gardening.description" => "Perfect for domestic farmers and home vegetable plantation with tailored advice for small-scale farming.",
        "features.gardening.button" => "Start Gardening",

        // Language support section
        "language.title" => "Multi-Language Support",
        "language.description" => "Access farming support in your preferred language for better understanding and communication",
        "language.support-text" => "Voice support and text assistance available in all listed languages",

        // Footer
        "footer.description" => "Empowering farmers with AI-powered support, government scheme access, and personalized agricultural solutions for sustainable farming.",
        "footer.commercial" => "Supporting commercial and domestic farmers",
        "footer.multilingual" => "Available in multiple regional languages",
        "footer.quick-links" => "Quick Links",
        "footer.contact" => "Contact",
        "footer.copyright" => "© 2024 SmartFarm. All rights reserved. A Government of India Initiative.",

        // Common
        "common.loading" => "Loading...",
        "common.error" => "Error",
        "common.success" => "Success",
        "common.cancel" => "Cancel",
        "common.save" => "Save",
        "common.close" => "Close",

        _ => return None,
    })
}

// ── Hindi ─────────────────────────────────────────────────────────

#[allow(clippy::too_many_lines)]
fn hi(key: &str) -> Option<&'static str> {
    Some(match key {
        // Header
        "nav.home" => "होम",
        "nav.schemes" => "योजनाएं",
        "nav.climate" => "जलवायु",
        "nav.disease-detection" => "रोग पहचान",
        "nav.voice-support" => "आवाज सहायता",
        "nav.contact" => "संपर्क",
        "nav.get-started" => "शुरू करें",
        "nav.language" => "भाषा",

        // Hero section
        "hero.title" => "बेहतर फसल के लिए",
        "hero.title.highlight" => "स्मार्ट खेती",
        "hero.description" => "किसानों के लिए AI-संचालित सहायता प्रणाली जिसमें सरकारी योजनाएं, जलवायु पूर्वानुमान, रोग पहचान, और आपकी आवश्यकताओं और बजट के आधार पर व्यक्तिगत सिफारिशें शामिल हैं।",
        "hero.get-started" => "शुरू करें",
        "hero.learn-more" => "और जानें",

        // Features section
        "features.title" => "व्यापक कृषि समाधान",
        "features.description" => "सूचित कृषि निर्णय लेने के लिए आपको जो कुछ भी चाहिए, सरकारी सहायता से लेकर टिकाऊ कृषि के लिए AI-संचालित अंतर्दृष्टि तक।",
        "features.schemes.title" => "सरकारी योजनाएं",
        "features.schemes.description" => "MSP योजनाओं, केंद्रीय और राज्य सरकारी ऋण, कीटनाशकों और कृषि उपकरणों पर सब्सिडी का उपयोग करें।",
        "features.schemes.button" => "योजनाएं देखें",
        "features.climate.title" => "जलवायु पूर्वानुमान",
        "features.climate.description" => "बेहतर उपज के लिए अपनी फसलों की प्रभावी योजना बनाने हेतु AI-संचालित मौसम पूर्वानुमान और जलवायु अंतर्दृष्टि प्राप्त करें।",
        "features.climate.button" => "मौसम जांचें",
        "features.disease.title" => "रोग पहचान",
        "features.disease.description" => "पौधों की तस्वीरें अपलोड करें और तत्काल उपचार सिफारिशों के लिए AI-संचालित विश्लेषण के साथ तुरंत रोगों का पता लगाएं।",
        "features.disease.button" => "पौधे की तस्वीर अपलोड करें",
        "features.voice.title" => "आवाज सहायता",
        "features.voice.description" => "अपनी भाषा में प्रश्न पूछें और तुरंत AI-संचालित उत्तर प्राप्त करें। कई क्षेत्रीय भाषाओं का समर्थन करता है।",
        "features.voice.button" => "आवाज सहायता आजमाएं",
        "features.budget.title" => "बजट योजना",
        "features.budget.description" => "इष्टतम संसाधन आवंटन के लिए अपने बजट और कृषि आवश्यकताओं के आधार पर व्यक्तिगत सिफारिशें प्राप्त करें।",
        "features.budget.button" => "बजट की योजना बनाएं",
        "features.gardening.title" => "घरेलू बागवानी",
        "features.gardening.description" => "छोटे पैमाने की खेती के लिए अनुकूलित सलाह के साथ घरेलू किसानों और घरेलू सब्जी रोपण के लिए बिल्कुल सही।",
        "features.gardening.button" => "बागवानी शुरू करें",

        // Language support section
        "language.title" => "बहु-भाषा समर्थन",
        "language.description" => "बेहतर समझ और संचार के लिए अपनी पसंदीदा भाषा में कृषि सहायता प्राप्त करें",
        "language.support-text" => "सभी सूचीबद्ध भाषाओं में आवाज सहायता और पाठ सहायता उपलब्ध है",

        // Footer
        "footer.description" => "टिकाऊ कृषि के लिए AI-संचालित सहायता, सरकारी योजना पहुंच, और व्यक्तिगत कृषि समाधानों के साथ किसानों को सशक्त बनाना।",
        "footer.commercial" => "वाणिज्यिक और घरेलू किसानों का समर्थन",
        "footer.multilingual" => "कई क्षेत्रीय भाषाओं में उपलब्ध",
        "footer.quick-links" => "त्वरित लिंक",
        "footer.contact" => "संपर्क",
        "footer.copyright" => "© 2024 स्मार्टफार्म। सभी अधिकार सुरक्षित। भारत सरकार की एक पहल।",

        // Common
        "common.loading" => "लोड हो रहा है...",
        "common.error" => "त्रुटि",
        "common.success" => "सफलता",
        "common.cancel" => "रद्द करें",
        "common.save" => "सहेजें",
        "common.close" => "बंद करें",

        _ => return None,
    })
}

// ── Malayalam ─────────────────────────────────────────────────────

#[allow(clippy::too_many_lines)]
fn ml(key: &str) -> Option<&'static str> {
    Some(match key {
        // Header
        "nav.home" => "ഹോം",
        "nav.schemes" => "പദ്ധതികൾ",
        "nav.climate" => "കാലാവസ്ഥ",
        "nav.disease-detection" => "രോഗ കണ്ടെത്തൽ",
        "nav.voice-support" => "ശബ്ദ പിന്തുണ",
        "nav.contact" => "ബന്ധപ്പെടുക",
        "nav.get-started" => "ആരംഭിക്കുക",
        "nav.language" => "ഭാഷ",

        // Hero section
        "hero.title" => "മികച്ച വിളവെടുപ്പിനായി",
        "hero.title.highlight" => "സ്മാർട്ട് കൃഷി",
        "hero.description" => "സർക്കാർ പദ്ധതികൾ, കാലാവസ്ഥാ പ്രവചനങ്ങൾ, രോഗ തിരിച്ചറിയൽ, നിങ്ങളുടെ ആവശ്യങ്ങളും ബജറ്റും അടിസ്ഥാനമാക്കിയുള്ള വ്യക്തിഗത ശുപാർശകൾ എന്നിവയുള്ള കർഷകർക്കുള്ള AI-പവർഡ് സപ്പോർട്ട് സിസ്റ്റം.",
        "hero.get-started" => "ആരംഭിക്കുക",
        "hero.learn-more" => "കൂടുതൽ അറിയുക",

        // Features section
        "features.title" => "സമഗ്ര കൃഷി പരിഹാരങ്ങൾ",
        "features.description" => "സർക്കാർ പിന്തുണ മുതൽ സുസ്ഥിര കൃഷിക്കുള്ള AI-പവർഡ് ഇൻസൈറ്റുകൾ വരെ, വിവരമുള്ള കൃഷി തീരുമാനങ്ങൾ എടുക്കാൻ നിങ്ങൾക്ക് ആവശ്യമായതെല്ലാം.",
        "features.schemes.title" => "സർക്കാർ പദ്ധതികൾ",
        "features.schemes.description" => "MSP പദ്ധതികൾ, കേന്ദ്ര-സംസ്ഥാന സർക്കാർ വായ്പകൾ, കീടനാശിനികളിലും കൃഷി ഉപകരണങ്ങളിലും സബ്സിഡി എന്നിവ ആക്സസ് ചെയ്യുക.",
        "features.schemes.button" => "പദ്ധതികൾ കാണുക",
        "features.climate.title" => "കാലാവസ്ഥാ പ്രവചനങ്ങൾ",
        "features.climate.description" => "മികച്ച വിളവിനായി നിങ്ങളുടെ വിളകൾ ഫലപ്രദമായി ആസൂത്രണം ചെയ്യാൻ AI-പവർഡ് കാലാവസ്ഥാ പ്രവചനങ്ങളും കാലാവസ്ഥാ ഇൻസൈറ്റുകളും നേടുക.",
        "features.climate.button" => "കാലാവസ്ഥ പരിശോധിക്കുക",
        "features.disease.title" => "രോഗ കണ്ടെത്തൽ",
        "features.disease.description" => "ചെടികളുടെ ചിത്രങ്ങൾ അപ്‌ലോഡ് ചെയ്യുക, ഉടനടി ചികിത്സാ ശുപാർശകൾക്കായി AI-പവർഡ് വിശകലനം ഉപയോഗിച്ച് തൽക്ഷണം രോഗങ്ങൾ കണ്ടെത്തുക.",
        "features.disease.button" => "ചെടിയുടെ ചിത്രം അപ്‌ലോഡ് ചെയ്യുക",
        "features.voice.title" => "ശബ്ദ പിന്തുണ",
        "features.voice.description" => "നിങ്ങളുടെ സ്വന്തം ഭാഷയിൽ ചോദ്യങ്ങൾ ചോദിക്കുക, തൽക്ഷണം AI-പവർഡ് ഉത്തരങ്ങൾ നേടുക. ഒന്നിലധികം പ്രാദേശിക ഭാഷകളെ പിന്തുണയ്ക്കുന്നു.",
        "features.voice.button" => "ശബ്ദ പിന്തുണ പരീക്ഷിക്കുക",
        "features.budget.title" => "ബജറ്റ് ആസൂത്രണം",
        "features.budget.description" => "ഒപ്റ്റിമൽ റിസോഴ്സ് അലോക്കേഷനായി നിങ്ങളുടെ ബജറ്റും കൃഷി ആവശ്യങ്ങളും അടിസ്ഥാനമാക്കി വ്യക്തിഗത ശുപാർശകൾ നേടുക.",
        "features.budget.button" => "ബജറ്റ് ആസൂത്രണം ചെയ്യുക",
        "features.gardening.title" => "വീട്ടുതോട്ടം",
        "features.gardening.description" => "ചെറുകിട കൃഷിക്കുള്ള അനുയോജ്യമായ ഉപദേശങ്ങളോടെ ഗാർഹിക കർഷകർക്കും വീട്ടിലെ പച്ചക്കറി കൃഷിക്കും അനുയോജ്യം.",
        "features.gardening.button" => "തോട്ടപ്പണി ആരംഭിക്കുക",

        // Language support section
        "language.title" => "മൾട്ടി-ലാംഗ്വേജ് സപ്പോർട്ട്",
        "language.description" => "മികച്ച ധാരണയ്ക്കും ആശയവിനിമയത്തിനുമായി നിങ്ങളുടെ ഇഷ്ട ഭാഷയിൽ കൃഷി പിന്തുണ ആക്സസ് ചെയ്യുക",
        "language.support-text" => "ലിസ്റ്റ് ചെയ്ത എല്ലാ ഭാഷകളിലും ശബ്ദ പിന്തുണയും ടെക്സ്റ്റ് സഹായവും ലഭ്യമാണ്",

        // Footer
        "footer.description" => "സുസ്ഥിര കൃഷിക്കായി AI-പവർഡ് സപ്പോർട്ട്, സർക്കാർ സ്കീം ആക്സസ്, വ്യക്തിഗത കാർഷിക പരിഹാരങ്ങൾ എന്നിവയിലൂടെ കർഷകരെ ശാക്തീകരിക്കുന്നു.",
        "footer.commercial" => "വാണിജ്യ, ഗാർഹിക കർഷകരെ പിന്തുണയ്ക്കുന്നു",
        "footer.multilingual" => "ഒന്നിലധികം പ്രാദേശിക ഭാഷകളിൽ ലഭ്യം",
        "footer.quick-links" => "ദ്രുത ലിങ്കുകൾ",
        "footer.contact" => "ബന്ധപ്പെടുക",
        "footer.copyright" => "© 2024 സ്മാർട്ട്ഫാം. എല്ലാ അവകാശങ്ങളും സംരക്ഷിതം. ഇന്ത്യാ ഗവൺമെന്റിന്റെ ഒരു സംരംഭം.",

        // Common
        "common.loading" => "ലോഡ് ചെയ്യുന്നു...",
        "common.error" => "പിശക്",
        "common.success" => "വിജയം",
        "common.cancel" => "റദ്ദാക്കുക",
        "common.save" => "സേവ് ചെയ്യുക",
        "common.close" => "അടയ്ക്കുക",

        _ => return None,
    })
}

// ── Telugu (partial — header and hero only) ───────────────────────

fn te(key: &str) -> Option<&'static str> {
    Some(match key {
        "nav.home" => "హోమ్",
        "nav.schemes" => "పథకాలు",
        "nav.climate" => "వాతావరణం",
        "nav.disease-detection" => "వ్యాధి గుర్తింపు",
        "nav.voice-support" => "వాయిస్ సపోర్ట్",
        "nav.contact" => "సంప్రదించండి",
        "nav.get-started" => "ప్రారంభించండి",
        "nav.language" => "భాష",
        "hero.title" => "మెరుగైన పంటల కోసం",
        "hero.title.highlight" => "స్మార్ట్ వ్యవసాయం",
        "hero.description" => "ప్రభుత్వ పథకాలు, వాతావరణ అంచనాలు, వ్యాధి గుర్తింపు మరియు మీ అవసరాలు మరియు బడ్జెట్ ఆధారంగా వ్యక్తిగత సిఫార్సులతో రైతుల కోసం AI-శక్తితో కూడిన మద్దతు వ్యవస్థ.",
        "hero.get-started" => "ప్రారంభించండి",
        "hero.learn-more" => "మరింత తెలుసుకోండి",
        _ => return None,
    })
}

// ── Tamil (partial) ───────────────────────────────────────────────

fn ta(key: &str) -> Option<&'static str> {
    Some(match key {
        "nav.home" => "முகப்பு",
        "nav.schemes" => "திட்டங்கள்",
        "nav.climate" => "காலநிலை",
        "nav.disease-detection" => "நோய் கண்டறிதல்",
        "nav.voice-support" => "குரல் ஆதரவு",
        "nav.contact" => "தொடர்பு",
        "nav.get-started" => "தொடங்குங்கள்",
        "nav.language" => "மொழி",
        "hero.title" => "சிறந்த அறுவடைக்காக",
        "hero.title.highlight" => "ஸ்மார்ட் விவசாயம்",
        "hero.description" => "அரசாங்க திட்டங்கள், காலநிலை கணிப்புகள், நோய் அடையாளம் மற்றும் உங்கள் தேவைகள் மற்றும் பட்ஜெட்டின் அடிப்படையில் தனிப்பட்ட பரிந்துரைகளுடன் விவசாயிகளுக்கான AI-இயங்கும் ஆதரவு அமைப்பு.",
        "hero.get-started" => "தொடங்குங்கள்",
        "hero.learn-more" => "மேலும் அறிக",
        _ => return None,
    })
}

// ── Kannada (partial) ─────────────────────────────────────────────

fn kn(key: &str) -> Option<&'static str> {
    Some(match key {
        "nav.home" => "ಮುಖ್ಯಪುಟ",
        "nav.schemes" => "ಯೋಜನೆಗಳು",
        "nav.climate" => "ಹವಾಮಾನ",
        "nav.disease-detection" => "ರೋಗ ಪತ್ತೆ",
        "nav.voice-support" => "ಧ್ವನಿ ಬೆಂಬಲ",
        "nav.contact" => "ಸಂಪರ್ಕಿಸಿ",
        "nav.get-started" => "ಪ್ರಾರಂಭಿಸಿ",
        "nav.language" => "ಭಾಷೆ",
        "hero.title" => "ಉತ್ತಮ ಸುಗ್ಗಿಗಾಗಿ",
        "hero.title.highlight" => "ಸ್ಮಾರ್ಟ್ ಕೃಷಿ",
        "hero.description" => "ಸರ್ಕಾರಿ ಯೋಜನೆಗಳು, ಹವಾಮಾನ ಮುನ್ಸೂಚನೆಗಳು, ರೋಗ ಗುರುತಿಸುವಿಕೆ ಮತ್ತು ನಿಮ್ಮ ಅಗತ್ಯತೆಗಳು ಮತ್ತು ಬಜೆಟ್ ಆಧಾರದ ಮೇಲೆ ವೈಯಕ್ತಿಕ ಶಿಫಾರಸುಗಳೊಂದಿಗೆ ರೈತರಿಗಾಗಿ AI-ಚಾಲಿತ ಬೆಂಬಲ ವ್ಯವಸ್ಥೆ.",
        "hero.get-started" => "ಪ್ರಾರಂಭಿಸಿ",
        "hero.learn-more" => "ಇನ್ನಷ್ಟು ತಿಳಿಯಿರಿ",
        _ => return None,
    })
}

// ── Marathi (partial) ─────────────────────────────────────────────

fn mr(key: &str) -> Option<&'static str> {
    Some(match key {
        "nav.home" => "मुख्यपृष्ठ",
        "nav.schemes" => "योजना",
        "nav.climate" => "हवामान",
        "nav.disease-detection" => "रोग ओळख",
        "nav.voice-support" => "आवाज समर्थन",
        "nav.contact" => "संपर्क",
        "nav.get-started" => "सुरुवात करा",
        "nav.language" => "भाषा",
        "hero.title" => "चांगल्या कापणीसाठी",
        "hero.title.highlight" => "स्मार्ट शेती",
        "hero.description" => "सरकारी योजना, हवामान अंदाज, रोग ओळख आणि तुमच्या गरजा आणि बजेटवर आधारित वैयक्तिक शिफारशींसह शेतकऱ्यांसाठी AI-चालित समर्थन प्रणाली.",
        "hero.get-started" => "सुरुवात करा",
        "hero.learn-more" => "अधिक जाणून घ्या",
        _ => return None,
    })
}

// ── Bengali (partial) ─────────────────────────────────────────────

fn bn(key: &str) -> Option<&'static str> {
    Some(match key {
        "nav.home" => "হোম",
        "nav.schemes" => "প্রকল্প",
        "nav.climate" => "জলবায়ু",
        "nav.disease-detection" => "রোগ সনাক্তকরণ",
        "nav.voice-support" => "ভয়েস সাপোর্ট",
        "nav.contact" => "যোগাযোগ",
        "nav.get-started" => "শুরু করুন",
        "nav.language" => "ভাষা",
        "hero.title" => "ভাল ফসলের জন্য",
        "hero.title.highlight" => "স্মার্ট কৃষি",
        "hero.description" => "সরকারি প্রকল্প, জলবায়ু পূর্বাভাস, রোগ সনাক্তকরণ এবং আপনার প্রয়োজন ও বাজেটের ভিত্তিতে ব্যক্তিগত সুপারিশ সহ কৃষকদের জন্য AI-চালিত সহায়তা ব্যবস্থা।",
        "hero.get-started" => "শুরু করুন",
        "hero.learn-more" => "আরও জানুন",
        _ => return None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn english_defines_every_key_constant() {
        for key in keys::ALL {
            let value = lookup(Language::English, key);
            assert!(value.is_some(), "English table is missing {key}");
            assert!(!value.unwrap().is_empty(), "English value for {key} is empty");
        }
    }

    #[test]
    fn no_table_defines_a_key_english_lacks() {
        // English is the fallback, so any key another table defines must
        // resolve there too.
        for lang in Language::ALL {
            for key in keys::ALL {
                if lookup(*lang, key).is_some() {
                    assert!(
                        lookup(Language::English, key).is_some(),
                        "{key} defined for {lang:?} but not English"
                    );
                }
            }
        }
    }

    #[test]
    fn hindi_and_malayalam_tables_are_complete() {
        for key in keys::ALL {
            assert!(lookup(Language::Hindi, key).is_some(), "Hindi missing {key}");
            assert!(
                lookup(Language::Malayalam, key).is_some(),
                "Malayalam missing {key}"
            );
        }
    }

    #[test]
    fn partial_tables_cover_header_and_hero() {
        let partial = [
            Language::Telugu,
            Language::Tamil,
            Language::Kannada,
            Language::Marathi,
            Language::Bengali,
        ];
        for lang in partial {
            assert!(lookup(lang, keys::NAV_HOME).is_some());
            assert!(lookup(lang, keys::HERO_TITLE).is_some());
            // Footer was never translated for these languages.
            assert!(lookup(lang, keys::FOOTER_COPYRIGHT).is_none());
        }
    }

    #[test]
    fn unknown_key_is_absent_everywhere() {
        for lang in Language::ALL {
            assert_eq!(lookup(*lang, "no.such.key"), None);
        }
    }

    #[test]
    fn hindi_nav_home() {
        assert_eq!(lookup(Language::Hindi, keys::NAV_HOME), Some("होम"));
    }
}
