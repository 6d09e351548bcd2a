use yew::prelude::*;

use crate::components::booking_form::BookingForm;

struct ServiceCard {
    title: &'static str,
    description: &'static str,
    price: &'static str,
    cities: &'static [&'static str],
}

const SERVICES: &[ServiceCard] = &[
    ServiceCard {
        title: "Сочи — Абхазия",
        description: "Комфортный трансфер до любого города Абхазии",
        price: "от 3 500 ₽",
        cities: &["Гагра", "Пицунда", "Гудаута", "Новый Афон", "Сухум"],
    },
    ServiceCard {
        title: "Трансфер из аэропорта",
        description: "Встреча с табличкой, помощь с багажом",
        price: "от 1 500 ₽",
        cities: &["Аэропорт Адлер", "Аэропорт Сочи", "Вокзал Адлер"],
    },
    ServiceCard {
        title: "Экскурсии",
        description: "Индивидуальные туры по Сочи и Абхазии",
        price: "от 5 000 ₽",
        cities: &["Красная поляна", "Олимпийский парк", "Озеро Рица"],
    },
];

struct ShowcaseCar {
    name: &'static str,
    category: &'static str,
    seats: &'static str,
    features: &'static [&'static str],
}

const SHOWCASE: &[ShowcaseCar] = &[
    ShowcaseCar {
        name: "Mercedes-Benz E-Class",
        category: "Бизнес",
        seats: "3 пассажира",
        features: &["Кожаный салон", "Климат-контроль", "Wi-Fi"],
    },
    ShowcaseCar {
        name: "Mercedes-Benz V-Class",
        category: "Минивэн",
        seats: "6 пассажиров",
        features: &["Просторный салон", "Панорамная крыша", "USB-порты"],
    },
    ShowcaseCar {
        name: "Mercedes-Benz S-Class",
        category: "Премиум",
        seats: "3 пассажира",
        features: &["VIP-класс", "Массаж сидений", "Шампанское"],
    },
];

const STATS: &[(&str, &str)] = &[
    ("10+", "Лет на рынке"),
    ("5000+", "Довольных клиентов"),
    ("24/7", "Поддержка"),
];

/// The public marketing page: hero with the booking form, services, fleet
/// showcase, about and contacts. The showcase content is editorial; the live
/// catalogs only drive the booking form itself.
#[function_component(Landing)]
pub fn landing() -> Html {
    html! {
        <div class="landing">
            <header class="site-header">
                <div class="container header-inner">
                    <a class="logo" href="/">
                        {"LUX"}<span class="logo-accent">{"Transfer"}</span>
                    </a>
                    <nav class="site-nav">
                        <a href="#услуги">{"Услуги"}</a>
                        <a href="#автопарк">{"Автопарк"}</a>
                        <a href="#о-нас">{"О нас"}</a>
                        <a href="#контакты">{"Контакты"}</a>
                    </nav>
                    <a class="btn btn-primary" href="tel:+79001234567">{"+7 (900) 123-45-67"}</a>
                </div>
            </header>

            <section id="главная" class="hero">
                <div class="container hero-grid">
                    <div class="hero-copy">
                        <h1>
                            {"Премиальный трансфер в "}
                            <span class="accent">{"Сочи"}</span>
                            {" и "}
                            <span class="accent">{"Абхазии"}</span>
                        </h1>
                        <p>
                            {"Комфортабельные автомобили бизнес и премиум-класса. \
                              Встреча с табличкой в аэропорту. Профессиональные водители \
                              с опытом более 10 лет."}
                        </p>
                    </div>
                    <div class="card hero-form">
                        <h3>{"Быстрое бронирование"}</h3>
                        <BookingForm />
                    </div>
                </div>
            </section>

            <section id="услуги" class="section section-alt">
                <div class="container">
                    <h2>{"Наши услуги"}</h2>
                    <p class="section-subtitle">
                        {"Предлагаем комфортный трансфер по самым популярным направлениям"}
                    </p>
                    <div class="card-grid">
                        { for SERVICES.iter().map(|service| html! {
                            <div class="card service-card">
                                <h3>{ service.title }</h3>
                                <p>{ service.description }</p>
                                <div class="service-price">{ service.price }</div>
                                <ul class="feature-list">
                                    { for service.cities.iter().map(|city| html! {
                                        <li>{ *city }</li>
                                    }) }
                                </ul>
                            </div>
                        }) }
                    </div>
                </div>
            </section>

            <section id="автопарк" class="section">
                <div class="container">
                    <h2>{"Наш автопарк"}</h2>
                    <p class="section-subtitle">
                        {"Премиальные автомобили Mercedes-Benz в идеальном состоянии"}
                    </p>
                    <div class="card-grid">
                        { for SHOWCASE.iter().map(|car| html! {
                            <div class="card fleet-card">
                                <div class="fleet-category">{ car.category }</div>
                                <h3>{ car.name }</h3>
                                <div class="fleet-seats">{ car.seats }</div>
                                <ul class="feature-list">
                                    { for car.features.iter().map(|feature| html! {
                                        <li>{ *feature }</li>
                                    }) }
                                </ul>
                            </div>
                        }) }
                    </div>
                </div>
            </section>

            <section id="о-нас" class="section section-alt">
                <div class="container">
                    <h2>{"О нас"}</h2>
                    <div class="stats-grid">
                        { for STATS.iter().map(|(number, label)| html! {
                            <div class="stat">
                                <div class="stat-number">{ *number }</div>
                                <div class="stat-label">{ *label }</div>
                            </div>
                        }) }
                    </div>
                    <div class="card about-card">
                        <p>
                            <strong>{"LUXTransfer"}</strong>
                            {" — это премиальный сервис трансфера в Сочи и Абхазии. \
                              Мы работаем с 2014 года и за это время перевезли более 5000 \
                              пассажиров. Наши водители — профессионалы с многолетним опытом, \
                              знающие все особенности дорог региона. Мы гарантируем комфорт, \
                              безопасность и пунктуальность."}
                        </p>
                    </div>
                </div>
            </section>

            <section id="контакты" class="section">
                <div class="container">
                    <h2>{"Связаться с нами"}</h2>
                    <div class="contact-grid">
                        <div class="contact-item">
                            <div class="contact-value">{"+7 (900) 123-45-67"}</div>
                            <div class="contact-label">{"Телефон"}</div>
                        </div>
                        <div class="contact-item">
                            <div class="contact-value">{"info@luxtransfer.ru"}</div>
                            <div class="contact-label">{"Email"}</div>
                        </div>
                        <div class="contact-item">
                            <div class="contact-value">{"Сочи, Адлер"}</div>
                            <div class="contact-label">{"Адрес"}</div>
                        </div>
                    </div>
                </div>
            </section>

            <footer class="site-footer">
                <div class="container">
                    <div class="logo">
                        {"LUX"}<span class="logo-accent">{"Transfer"}</span>
                    </div>
                    <p>{"Премиальный трансфер в Сочи и Абхазии с 2014 года"}</p>
                    <div class="footer-note">{"© 2024 LUXTransfer. Все права защищены."}</div>
                </div>
            </footer>
        </div>
    }
}
