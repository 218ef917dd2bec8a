pub(super) type Table = &'static [(&'static str, &'static [&'static str])];

pub(super) const ENGLISH: Table = &[
    (
        "Animals",
        &[
            "panther", "cheetah", "bear", "penguin", "horse", "hare", "monkey", "capybara", "pig",
            "hamster",
        ],
    ),
    (
        "Fruits",
        &[
            "orange", "papaya", "grape", "mango", "apricot", "nectarine", "fig", "pomelo", "apple",
            "grapefruit",
        ],
    ),
    (
        "Vegetables",
        &[
            "yam", "tomato", "artichoke", "broccoli", "eggplant", "celery", "cucumber", "carrot",
            "cabbage", "bean",
        ],
    ),
    (
        "Hobbies",
        &[
            "photography", "travel", "modeling", "knitting", "cooking", "gardening", "printing",
            "cycling", "pottery", "watercolor",
        ],
    ),
    (
        "Sports",
        &[
            "football", "basketball", "tennis", "hockey", "boxing", "motorsport", "volleyball",
            "swimming", "gymnastics", "golf",
        ],
    ),
    (
        "Flowers",
        &[
            "rose", "lily", "tulip", "carnation", "daisy", "orchid", "cornflower", "peony", "dahlia",
            "narcissus",
        ],
    ),
    (
        "Professions",
        &[
            "doctor", "teacher", "engineer", "cook", "policeman", "programmer", "builder", "lawyer",
            "pilot", "painter",
        ],
    ),
    (
        "Musical instruments",
        &[
            "guitar", "piano", "violin", "flute", "drum", "trumpet", "saxophone", "harp", "contrabass",
            "accordion",
        ],
    ),
    (
        "Transport",
        &[
            "car", "airplane", "train", "bicycle", "motorcycle", "bus", "ship", "tram", "subway",
            "boat",
        ],
    ),
    (
        "School supplies",
        &[
            "pencilcase", "pencil", "marker", "compass", "ruler", "briefcase", "backpack",
            "protractor", "eraser", "corrector",
        ],
    ),
];

pub(super) const RUSSIAN: Table = &[
    (
        "Животные",
        &[
            "пантера", "гепард", "медведь", "пингвин", "лошадь", "заяц", "обезьяна", "капибара",
            "свинья", "хомяк",
        ],
    ),
    (
        "Фрукты",
        &[
            "апельсин", "папайя", "виноград", "манго", "абрикос", "нектарин", "инжир", "помело",
            "яблоко", "грейпфрут",
        ],
    ),
    (
        "Овощи",
        &[
            "батат", "помидор", "топинамбур", "брокколи", "баклажан", "сельдерей", "огурец",
            "морковка", "капуста", "фасоль",
        ],
    ),
    (
        "Хобби",
        &[
            "фотография", "путешествия", "моделирование", "рукоделие", "кулинария", "садоводство",
            "книгопечатание", "велоспорт", "гончарство", "акварель",
        ],
    ),
    (
        "Спорт",
        &[
            "футбол", "баскетбол", "теннис", "хоккей", "бокс", "мотоспорт", "волейбол", "плавание",
            "гимнастика", "гольф",
        ],
    ),
    (
        "Цветы",
        &[
            "роза", "лилия", "тюльпан", "гвоздика", "ромашка", "орхидея", "василек", "пион",
            "георгин", "нарцисс",
        ],
    ),
    (
        "Профессии",
        &[
            "врач", "учитель", "инженер", "повар", "полицейский", "программист", "строитель",
            "адвокат", "пилот", "художник",
        ],
    ),
    (
        "Музыкальные инструменты",
        &[
            "гитара", "пианино", "скрипка", "флейта", "барабан", "труба", "саксофон", "арфа",
            "контрабас", "аккордеон",
        ],
    ),
    (
        "Транспорт",
        &[
            "машина", "самолет", "поезд", "велосипед", "мотоцикл", "автобус", "корабль", "трамвай",
            "метро", "катер",
        ],
    ),
    (
        "Школьные принадлежности",
        &[
            "пенал", "карандаш", "маркер", "циркуль", "линейка", "портфель", "рюкзак", "транспортир",
            "ластик", "корректор",
        ],
    ),
];
