//! Built-in starting data: a handful of Helsinki districts.

use indexmap::IndexMap;

use crate::error::SeedError;
use crate::model::{Area, AreaCollection, AreaName, Location, LocationId};

type SeedArea = (&'static str, &'static [(&'static str, f64, f64)]);

#[allow(clippy::unreadable_literal, clippy::excessive_precision)]
const HELSINKI: &[SeedArea] = &[
    (
        "Kamppi",
        &[
            ("4986070d-c9da-4178-ad88-42192bf01a4d", 60.17236385439803, 24.934887886047367),
            ("bf2af528-5410-42fe-a1ac-bfb704bab690", 60.167795542273105, 24.92098331451416),
            ("168ba56d-be0f-40e2-9460-52652c8cad5a", 60.16350416589006, 24.92136955261231),
            ("8405b3af-387f-43eb-a464-3f1abf1a4bd3", 60.160600230133824, 24.925746917724613),
            ("21a867dc-12f6-4d91-808e-0d0cdcc29207", 60.16282090997341, 24.932956695556644),
            ("1fab29ed-c3e3-4008-abc2-cccdd826b06c", 60.162073582548565, 24.934201240539554),
            ("726663c8-9993-4b38-b75f-a5e89da9c792", 60.165489797763136, 24.94381427764893),
            ("b52c2177-7887-48b9-b307-ee7e29100742", 60.166407845055865, 24.94377136230469),
        ],
    ),
    (
        "Punavuori",
        &[
            ("b90aa425-3871-442a-9ecc-e286aa48966e", 60.162073582548565, 24.934179782867435),
            ("eb49df14-d1d9-43fb-849b-85675eb3f3a0", 60.16293834559509, 24.933128356933597),
            ("29442362-7af8-4b79-8bf0-2694585f9fa4", 60.161806675778244, 24.929738044738773),
            ("113da39e-1127-469f-946c-2f241c60a5e6", 60.161070001844394, 24.929544925689697),
            ("1a351ff4-edb4-41e7-9e59-5e10ea600bf0", 60.159735405562365, 24.932012557983402),
            ("015b2acf-e900-4eba-be8c-9a8ed13ce0e6", 60.15774942597614, 24.9334716796875),
            ("a248fb3e-cc85-495f-a855-3a9f8b8973ee", 60.15802704324041, 24.940788745880127),
            ("4f22baa6-c1d7-47e3-8f60-2da8a7eef19b", 60.15916952037816, 24.94229078292847),
            ("bb631d29-52f9-4423-8ada-7c1156b1681b", 60.16078173363616, 24.94207620620728),
            ("0096f059-5ff0-4f37-93a1-1d851e9e3c05", 60.16208425877427, 24.942719936370853),
            ("a2726d0a-534e-4562-9082-deaf4b2991dc", 60.163023753056336, 24.945616722106937),
            ("97d8cd9a-6151-4314-a58b-5ea2cd901812", 60.16512684175867, 24.942741394042972),
        ],
    ),
    (
        "Kaivopuisto",
        &[
            ("c991870b-2cd9-4a69-bcfe-0095335ed5f6", 60.157429095449935, 24.96273994445801),
            ("6debe1b6-1758-4561-84ad-69f99c7da304", 60.15573129154271, 24.96273994445801),
            ("0b966ade-0204-4094-b62a-555355d52ee2", 60.153488774626965, 24.956688880920414),
            ("df8fe299-4102-427c-9242-30c1135abc51", 60.155656543443435, 24.950444698333744),
            ("a23eb359-c45a-40ac-8b31-67636a5b5867", 60.15894529902527, 24.95492935180664),
            ("d53c533b-ec70-43f5-9f25-aeb22df94eb4", 60.16116609068525, 24.956474304199222),
            ("e787b869-af73-459b-b14f-81d2dc4c49cb", 60.16024789694429, 24.958448410034183),
            ("039e0c6b-84fa-404d-89b3-f379669e01af", 60.15994894460934, 24.960508346557617),
        ],
    ),
    (
        "Katajanokka",
        &[
            ("497a66bf-d20b-4d6a-bc7b-7cf90ed905ec", 60.163077132606894, 24.969606399536136),
            ("c47fa7b2-d908-49fb-94d5-fbeafedaeab9", 60.16664269024329, 24.957933425903324),
            ("4cb11fd4-a969-45bc-96b0-aae2dc68ef94", 60.1678168910033, 24.95776176452637),
            ("6ca9c199-5690-402c-9994-82ff6ffc4721", 60.16910846337395, 24.959135055541996),
            ("3cd10e1b-23c5-40f2-814b-4b72b745ba4c", 60.16963148236986, 24.965701103210453),
            ("627e2b44-4c10-418e-bfc0-5b586c4529ef", 60.16850004304534, 24.96999263763428),
            ("cd281148-3728-4abb-a75f-aaabb674a62b", 60.16990899927236, 24.975357055664066),
            ("0ac19d1b-18f1-4b0b-8426-13fa636dd8b8", 60.168756221399065, 24.978747367858887),
            ("459460e4-3c18-4209-b617-7155979084c3", 60.167197772195834, 24.980850219726566),
        ],
    ),
    (
        "Jätkäsaari",
        &[
            ("d1bf58a6-c6b1-42d2-b391-0de21b0221b5", 60.15645740709047, 24.904589653015137),
            ("a27c9fd1-4f67-4ebf-938c-6b50336212e7", 60.15831533560997, 24.903259277343754),
            ("10a18518-addc-4df0-849e-a9d6a93f8f3b", 60.16171058881025, 24.914245605468754),
            ("17e57d84-a567-436c-804a-469b6dab244c", 60.161817352090665, 24.921884536743168),
            ("cbe7eb70-4df5-4064-a17b-1f293fbcdb91", 60.15570993496026, 24.923086166381836),
            ("c83ba6b6-08a2-4290-8113-94009a7fd1d9", 60.14774296186144, 24.914245605468754),
            ("5a65bf05-81be-41ca-ac73-21aa3eefe219", 60.14817019438939, 24.91162776947022),
            ("4b6c85eb-6763-4036-ba5c-e1f0141d0680", 60.152549007768975, 24.915018081665043),
            ("c6710da1-1151-43b7-a462-230eba2ddd0a", 60.15295481948042, 24.914159774780277),
            ("91c975b8-39a1-459f-92c3-aa93003d5916", 60.149515940571, 24.90733623504639),
            ("6b5c4f95-298a-4505-b272-5cf389ae07d9", 60.151630573293865, 24.903774261474613),
            ("af83c786-5806-4b5b-91cc-6a4b76a7503d", 60.15530415725744, 24.90248680114746),
            ("fb04a437-275c-4a43-b865-394487db5249", 60.15724757343269, 24.909009933471683),
            ("bfca6c9d-c5bd-4a24-bd66-4554930bca59", 60.15763197181232, 24.908494949340824),
        ],
    ),
];

/// The collection the store starts with when the shell supplies none.
#[must_use]
pub fn helsinki() -> AreaCollection {
    let areas: IndexMap<AreaName, Area> = HELSINKI
        .iter()
        .map(|(name, points)| {
            let area = Area::with_locations(points.iter().map(|(id, lat, lon)| {
                (LocationId::new(*id), Location::new(*lat, *lon))
            }));
            (AreaName::new(*name), area)
        })
        .collect();
    // HELSINKI is a non-empty literal table.
    AreaCollection::from_map_unchecked(areas)
}

/// Shell-supplied seed.
pub fn from_json(json: &str) -> Result<AreaCollection, SeedError> {
    AreaCollection::from_json(json)
}
