//! Hard-coded sample catalog shown on the home page.

use crate::models::Product;

const SAMPLE_PRODUCTS: [Product; 6] = [
    Product {
        id: 1,
        name: "Apple iPhone 13, 128GB, 4GB RAM, 5G, Midnight",
        image: "https://s13emagst.akamaized.net/products/40685/40684414/images/res_974dc0e4b6a1180b612c24afef8eb494.jpg",
        price: "979,99 лв.",
    },
    Product {
        id: 2,
        name: "Блендер Philips HR3041/00 Series 5000, 1200 W, Остриета New ProBlend Plus, Оребрена стъклена купа, 3 скорости плюс импулс, Подвижни остриета, Капацитет 2 л, Автоматизирано почистване с едно докосване, Черен",
        image: "https://s13emagst.akamaized.net/products/67591/67590545/images/res_8aaaf887d6ad8f061a462f621e202929.jpg",
        price: "173,99 лв.",
    },
    Product {
        id: 3,
        name: "Механична клавиатура ZENKABEAT, Bluetooth, 2.4 Ghz, RGB, 68 клавиша, Функция за бърза смяна, Адаптивен RGB софтуер, Съвместима с Play Station, Type-C към USB 3.0, Батерия 3150 mAh, С кабел/Безжична, Червени превключватели, Бял",
        image: "https://s13emagst.akamaized.net/products/34626/34625907/images/res_ad3c682c77f9f89f7943e27d297d7dd6.jpg",
        price: "121,09 лв.",
    },
    Product {
        id: 4,
        name: "Гира Orion, Винил, 5 кг",
        image: "https://s13emagst.akamaized.net/products/78233/78232949/images/res_f9a7433c3c80776da6b75c21b7ea2d40.jpg",
        price: "27,99 лв.",
    },
    Product {
        id: 5,
        name: "Двойно спално бельо, 4 части, Superior Satin Cotton, Yellow-Grey, мигли и звезди, Promerco®️",
        image: "https://s13emagst.akamaized.net/products/68126/68125402/images/res_060ea067eb96437f70e3cdf54eabb275.jpg?width=720&height=720&hash=22771AC83D0F654DC8610C22DA3681B2",
        price: "35,36 лв.",
    },
    Product {
        id: 6,
        name: "Крем от шамфъстък Pisti, За мазане, 200 г",
        image: "https://s13emagst.akamaized.net/products/56959/56958177/images/res_bbc8ad214d844859dfe6dc6e87f621c3.jpg?width=720&height=720&hash=AC8C3EA681724E74B33DE8DB0A908944",
        price: "18,62 лв.",
    },
];

pub fn sample_products() -> &'static [Product] {
    &SAMPLE_PRODUCTS
}
