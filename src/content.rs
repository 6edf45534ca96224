//! Built-in text for each variant

/// Encouragement shown after each pop (English set)
pub const ENGLISH_QUOTES: &[&str] = &[
    "The Lord is my strength and my shield; my heart trusts in him, and he helps me. - Psalm 28:7",
    "Be strong and courageous. Do not be afraid; do not be discouraged, for the Lord your God will be with you wherever you go. - Joshua 1:9",
    "I can do all this through Christ who gives me strength. - Philippians 4:13",
    "The Lord is close to the brokenhearted and saves those who are crushed in spirit. - Psalm 34:18",
    "For I know the plans I have for you, declares the Lord, plans to prosper you and not to harm you, plans to give you hope and a future. - Jeremiah 29:11",
    "Come to me, all you who are weary and burdened, and I will give you rest. - Matthew 11:28",
    "The Lord is my light and my salvation\u{2014}whom shall I fear? - Psalm 27:1",
    "Peace I leave with you; my peace I give you. - John 14:27",
    "Cast all your anxiety on him because he cares for you. - 1 Peter 5:7",
    "The Lord is good, a refuge in times of trouble. He cares for those who trust in him. - Nahum 1:7",
    "Trust in the Lord with all your heart and lean not on your own understanding. - Proverbs 3:5",
    "Do not fear, for I am with you; do not be dismayed, for I am your God. - Isaiah 41:10",
    "The Lord is my shepherd; I shall not want. - Psalm 23:1",
    "You are my hiding place; you will protect me from trouble and surround me with songs of deliverance. - Psalm 32:7",
    "God is our refuge and strength, an ever-present help in trouble. - Psalm 46:1",
    "The Lord will fight for you; you need only to be still. - Exodus 14:14",
    "Let us hold unswervingly to the hope we profess, for he who promised is faithful. - Hebrews 10:23",
    "The joy of the Lord is your strength. - Nehemiah 8:10",
    "You are never alone; God\u{2019}s presence is your comfort.",
    "Your faith will lead you to a future filled with hope.",
];

/// Encouragement shown after each pop (Spanish set)
pub const SPANISH_QUOTES: &[&str] = &[
    "El Señor es mi fuerza y mi escudo; en él confía mi corazón, y él me ayuda. - Salmo 28:7",
    "Sé fuerte y valiente. No temas ni desmayes, porque el Señor tu Dios estará contigo dondequiera que vayas. - Josué 1:9",
    "Todo lo puedo en Cristo que me fortalece. - Filipenses 4:13",
    "Cercano está el Señor a los quebrantados de corazón y salva a los de espíritu abatido. - Salmo 34:18",
    "Porque yo sé los planes que tengo para ustedes, planes de bienestar y no de calamidad, para darles un futuro y una esperanza. - Jeremías 29:11",
    "Vengan a mí todos los que están cansados y agobiados, y yo les daré descanso. - Mateo 11:28",
    "El Señor es mi luz y mi salvación; ¿a quién temeré? - Salmo 27:1",
    "La paz les dejo; mi paz les doy. - Juan 14:27",
    "Depositen en él toda ansiedad, porque él cuida de ustedes. - 1 Pedro 5:7",
    "Bueno es el Señor, refugio en el día de la angustia; conoce a los que en él confían. - Nahúm 1:7",
    "Confía en el Señor de todo corazón, y no en tu propia inteligencia. - Proverbios 3:5",
    "No temas, porque yo estoy contigo; no desmayes, porque yo soy tu Dios. - Isaías 41:10",
    "El Señor es mi pastor; nada me faltará. - Salmo 23:1",
    "Tú eres mi refugio; tú me protegerás del peligro y me rodearás con cánticos de liberación. - Salmo 32:7",
    "Dios es nuestro amparo y nuestra fortaleza, nuestra ayuda segura en momentos de angustia. - Salmo 46:1",
    "El Señor peleará por ustedes; ustedes solo quédense tranquilos. - Éxodo 14:14",
    "Mantengamos firme la esperanza que profesamos, porque fiel es el que hizo la promesa. - Hebreos 10:23",
    "El gozo del Señor es nuestra fuerza. - Nehemías 8:10",
    "Nunca estás solo; la presencia de Dios es tu consuelo.",
    "Tu fe te llevará a un futuro lleno de esperanza.",
];

/// Shown when the browser blocks ambient autoplay
pub const ENGLISH_AUDIO_HINT: &str = "Tap anywhere to enable background music";
