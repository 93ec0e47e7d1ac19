//! Built-in category trigger tables, one per sentiment bucket.
//!
//! Each entry is `(category name, trigger substrings)`. Order matters:
//! it is the presentation order and the tie-break for equal review
//! counts. The data-driven form of these tables is
//! [`crate::analysis::categories::CategoryCatalog`].

/// Categories scanned in positive reviews.
pub const POSITIVE_CATEGORIES: &[(&str, &[&str])] = &[
    (
        "맛",
        &[
            "맛있", "달콤", "고소", "진한", "부드러", "깔끔", "신선", "풍미", "향", "달달", "짭짤",
            "매콤", "시원", "담백", "진짜맛있", "존맛",
        ],
    ),
    (
        "식감",
        &[
            "쫄깃", "바삭", "촉촉", "부드러", "탱탱", "씹히", "질감", "식감", "텍스처", "크런치",
            "쫀득", "말랑", "단단",
        ],
    ),
    (
        "배송",
        &[
            "배송", "포장", "빠른", "신속", "안전", "포장상태", "배달", "택배", "도착", "빨리",
            "신속배송", "당일배송",
        ],
    ),
    (
        "가격",
        &[
            "저렴", "합리적", "가성비", "할인", "싼", "경제적", "가격", "비용", "돈", "가격대비",
            "세일", "특가",
        ],
    ),
    (
        "서비스",
        &[
            "친절", "응답", "문의", "교환", "환불", "고객서비스", "직원", "상담", "대응", "서비스",
            "응대",
        ],
    ),
    (
        "품질",
        &[
            "품질", "만족", "좋은", "훌륭", "우수", "최고", "완벽", "정성", "고급", "퀄리티",
        ],
    ),
    (
        "외관",
        &[
            "예쁜", "깔끔", "포장", "디자인", "색깔", "모양", "보기좋", "깨끗", "이쁜", "예뻐",
            "디자인이쁜",
        ],
    ),
    (
        "양",
        &["많이", "푸짐", "양많", "충분", "넉넉", "가득", "풍성", "듬뿍"],
    ),
];

/// Categories scanned in neutral reviews.
pub const NEUTRAL_CATEGORIES: &[(&str, &[&str])] = &[
    (
        "일반적",
        &[
            "그냥", "보통", "평범", "무난", "일반적", "나쁘지않", "그럭저럭", "평균",
        ],
    ),
    (
        "애매한 맛",
        &["그저그런", "평범한맛", "특별하지않", "무난한맛", "그런대로"],
    ),
    (
        "보통 품질",
        &["보통품질", "평균적", "무난한품질", "그럭저럭품질"],
    ),
    (
        "가격 무난",
        &["적당", "그럭저럭가격", "무난한가격", "평균가격"],
    ),
    ("배송 보통", &["보통배송", "평균배송", "무난한배송"]),
    (
        "애매한 평가",
        &["모르겠", "애매", "그냥그래", "특별한감정없", "딱히"],
    ),
    (
        "기대와 다름",
        &["기대보다", "생각보다", "예상과달라", "기대와달라"],
    ),
];

/// Categories scanned in negative reviews.
pub const NEGATIVE_CATEGORIES: &[(&str, &[&str])] = &[
    (
        "맛 문제",
        &[
            "맛없", "별로", "짜다", "달다", "시다", "쓰다", "비린내", "냄새", "맛이이상",
            "맛이없어",
        ],
    ),
    (
        "품질 문제",
        &[
            "품질나쁘", "조잡", "싸구려", "부실", "불량", "하자", "망가져", "깨져",
        ],
    ),
    (
        "배송 문제",
        &[
            "배송늦", "포장불량", "배송문제", "늦게도착", "파손", "포장상태나쁘", "배송오류",
        ],
    ),
    (
        "가격 불만",
        &[
            "비싸", "비쌈", "가격부담", "가성비나쁘", "돈아까워", "가격대비별로",
        ],
    ),
    (
        "서비스 불만",
        &[
            "불친절", "응답없", "문의무시", "서비스나쁘", "대응늦", "무례",
        ],
    ),
    (
        "크기/양 부족",
        &["작다", "적어", "양적어", "크기작아", "부족", "양부족"],
    ),
    (
        "기대 실망",
        &["실망", "기대이하", "후회", "별로야", "최악", "다시안사"],
    ),
    (
        "기타 불만",
        &["불편", "문제", "고장", "작동안됨", "사용법복잡"],
    ),
];
