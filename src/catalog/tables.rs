//! Static language tables, one per translation model.
//!
//! Labels are the Turkish display names shown in the language pickers.

use super::LanguageOption;

const fn lang(code: &'static str, label: &'static str) -> LanguageOption {
    LanguageOption { code, label }
}

/// mBART-50 (`xx_YY` language codes).
pub static MBART50_LANGUAGES: &[LanguageOption] = &[
    lang("ar_AR", "Arapça"),
    lang("cs_CZ", "Çekçe"),
    lang("de_DE", "Almanca"),
    lang("en_XX", "İngilizce"),
    lang("es_XX", "İspanyolca"),
    lang("et_EE", "Estonca"),
    lang("fi_FI", "Fince"),
    lang("fr_XX", "Fransızca"),
    lang("gu_IN", "Gujarati"),
    lang("hi_IN", "Hintçe"),
    lang("it_IT", "İtalyanca"),
    lang("ja_XX", "Japonca"),
    lang("kk_KZ", "Kazakça"),
    lang("ko_KR", "Korece"),
    lang("lt_LT", "Litvanca"),
    lang("lv_LV", "Letonca"),
    lang("my_MM", "Burma Dili"),
    lang("ne_NP", "Nepalce"),
    lang("nl_XX", "Flemenkçe"),
    lang("ro_RO", "Romence"),
    lang("ru_RU", "Rusça"),
    lang("si_LK", "Seylanca"),
    lang("tr_TR", "Türkçe"),
    lang("vi_VN", "Vietnamca"),
    lang("zh_CN", "Çince"),
    lang("af_ZA", "Afrikaanca"),
    lang("az_AZ", "Azerice"),
    lang("bn_IN", "Bengalce"),
    lang("fa_IR", "Farsça"),
    lang("he_IL", "İbranice"),
    lang("hr_HR", "Hırvatça"),
    lang("id_ID", "Endonezce"),
    lang("ka_GE", "Gürcüce"),
    lang("km_KH", "Kmerce"),
    lang("mk_MK", "Makedonca"),
    lang("ml_IN", "Malayalam"),
    lang("mn_MN", "Moğolca"),
    lang("mr_IN", "Marathi"),
    lang("pl_PL", "Lehçe"),
    lang("ps_AF", "Peştuca"),
    lang("pt_XX", "Portekizce"),
    lang("sv_SE", "İsveççe"),
    lang("sw_KE", "Svahili"),
    lang("ta_IN", "Tamilce"),
    lang("te_IN", "Telugu"),
    lang("th_TH", "Tayca"),
    lang("tl_XX", "Tagalogca"),
    lang("uk_UA", "Ukraynaca"),
    lang("ur_PK", "Urduca"),
    lang("xh_ZA", "Xhosa"),
    lang("gl_ES", "Galiçyaca"),
    lang("sl_SI", "Slovence"),
];

/// M2M100 (ISO 639 codes).
pub static M2M100_LANGUAGES: &[LanguageOption] = &[
    lang("af", "Afrikaans"),
    lang("am", "Amharca"),
    lang("ar", "Arapça"),
    lang("ast", "Asturyasça"),
    lang("az", "Azerice"),
    lang("ba", "Başkurtça"),
    lang("be", "Belarusça"),
    lang("bg", "Bulgarca"),
    lang("bn", "Bengalce"),
    lang("br", "Bretonca"),
    lang("bs", "Boşnakça"),
    lang("ca", "Katalanca"),
    lang("ceb", "Cebuano"),
    lang("cs", "Çekçe"),
    lang("cy", "Galce"),
    lang("da", "Danca"),
    lang("de", "Almanca"),
    lang("el", "Yunanca"),
    lang("en", "İngilizce"),
    lang("es", "İspanyolca"),
    lang("et", "Estonyaca"),
    lang("fa", "Farsça"),
    lang("ff", "Fulaca"),
    lang("fi", "Fince"),
    lang("fr", "Fransızca"),
    lang("fy", "Batı Frizcesi"),
    lang("ga", "İrlandaca"),
    lang("gd", "İskoç Gaelcesi"),
    lang("gl", "Galiçyaca"),
    lang("gu", "Güceratça"),
    lang("ha", "Hausaca"),
    lang("he", "İbranice"),
    lang("hi", "Hintçe"),
    lang("hr", "Hırvatça"),
    lang("ht", "Haiti Kreyolu"),
    lang("hu", "Macarca"),
    lang("hy", "Ermenice"),
    lang("id", "Endonezce"),
    lang("ig", "İgbo"),
    lang("ilo", "Iloko"),
    lang("is", "İzlandaca"),
    lang("it", "İtalyanca"),
    lang("ja", "Japonca"),
    lang("jv", "Cava Dili"),
    lang("ka", "Gürcüce"),
    lang("kk", "Kazakça"),
    lang("km", "Kmerce"),
    lang("kn", "Kannada"),
    lang("ko", "Korece"),
    lang("lb", "Lüksemburgca"),
    lang("lg", "Ganda"),
    lang("ln", "Lingala"),
    lang("lo", "Laoca"),
    lang("lt", "Litvanca"),
    lang("lv", "Letonca"),
    lang("mg", "Malgazca"),
    lang("mk", "Makedonca"),
    lang("ml", "Malayalam"),
    lang("mn", "Moğolca"),
    lang("mr", "Marathi"),
    lang("ms", "Malayca"),
    lang("my", "Burmaca"),
    lang("ne", "Nepalce"),
    lang("nl", "Felemenkçe"),
    lang("no", "Norveççe"),
    lang("ns", "Kuzey Sotho"),
    lang("oc", "Oksitanca"),
    lang("or", "Oriya"),
    lang("pa", "Pencapça"),
    lang("pl", "Lehçe"),
    lang("ps", "Peştuca"),
    lang("pt", "Portekizce"),
    lang("ro", "Rumence"),
    lang("ru", "Rusça"),
    lang("sd", "Sindhî"),
    lang("si", "Sinhala"),
    lang("sk", "Slovakça"),
    lang("sl", "Slovence"),
    lang("so", "Somalice"),
    lang("sq", "Arnavutça"),
    lang("sr", "Sırpça"),
    lang("ss", "Swati"),
    lang("su", "Sundaca"),
    lang("sv", "İsveççe"),
    lang("sw", "Svahili"),
    lang("ta", "Tamilce"),
    lang("th", "Tayca"),
    lang("tl", "Tagalog"),
    lang("tn", "Tsvana"),
    lang("tr", "Türkçe"),
    lang("uk", "Ukraynaca"),
    lang("ur", "Urduca"),
    lang("uz", "Özbekçe"),
    lang("vi", "Vietnamca"),
    lang("wo", "Wolof"),
    lang("xh", "Xhosa"),
    lang("yi", "Yidiş"),
    lang("yo", "Yorubaca"),
    lang("zh", "Çince"),
    lang("zu", "Zuluca"),
];

/// NLLB-200 (FLORES-200 `lang_Script` codes).
pub static NLLB_LANGUAGES: &[LanguageOption] = &[
    lang("ace_Arab", "Açece (Arapça)"),
    lang("ace_Latn", "Açece (Latin)"),
    lang("acm_Arab", "Mezopotamya Arapçası"),
    lang("acq_Arab", "Ta'izzi-Adeni Arapçası"),
    lang("aeb_Arab", "Tunus Arapçası"),
    lang("afr_Latn", "Afrikaans"),
    lang("ajp_Arab", "Güney Levanten Arapçası"),
    lang("aka_Latn", "Akan"),
    lang("amh_Ethi", "Amharca"),
    lang("apc_Arab", "Kuzey Levanten Arapçası"),
    lang("arb_Arab", "Standart Arapça"),
    lang("ars_Arab", "Necd Arapçası"),
    lang("ary_Arab", "Fas Arapçası"),
    lang("arz_Arab", "Mısır Arapçası"),
    lang("asm_Beng", "Assamca"),
    lang("ast_Latn", "Asturyasça"),
    lang("awa_Deva", "Awadhi"),
    lang("ayr_Latn", "Aymara"),
    lang("azb_Arab", "Güney Azerice"),
    lang("azj_Latn", "Kuzey Azerice"),
    lang("bak_Cyrl", "Başkurtça"),
    lang("bam_Latn", "Bambara"),
    lang("ban_Latn", "Bali Dili"),
    lang("bel_Cyrl", "Belarusça"),
    lang("bem_Latn", "Bemba"),
    lang("ben_Beng", "Bengalce"),
    lang("bho_Deva", "Bhojpuri"),
    lang("bjn_Arab", "Banjar (Arapça)"),
    lang("bjn_Latn", "Banjar (Latin)"),
    lang("bod_Tibt", "Tibetçe"),
    lang("bos_Latn", "Boşnakça"),
    lang("bug_Latn", "Bugis Dili"),
    lang("bul_Cyrl", "Bulgarca"),
    lang("cat_Latn", "Katalanca"),
    lang("ceb_Latn", "Cebuano"),
    lang("ces_Latn", "Çekçe"),
    lang("cjk_Latn", "Chokwe"),
    lang("ckb_Arab", "Orta Kürtçe"),
    lang("crh_Latn", "Kırım Tatarcası"),
    lang("cym_Latn", "Galce"),
    lang("dan_Latn", "Danca"),
    lang("deu_Latn", "Almanca"),
    lang("dik_Latn", "Güneybatı Dinka"),
    lang("dyu_Latn", "Dyula"),
    lang("dzo_Tibt", "Dzongkha"),
    lang("ell_Grek", "Yunanca"),
    lang("eng_Latn", "İngilizce"),
    lang("epo_Latn", "Esperanto"),
    lang("est_Latn", "Estonyaca"),
    lang("eus_Latn", "Baskça"),
    lang("ewe_Latn", "Ewe"),
    lang("fao_Latn", "Faroe Dili"),
    lang("pes_Arab", "İran Farsçası"),
    lang("fij_Latn", "Fiji Dili"),
    lang("fin_Latn", "Fince"),
    lang("fon_Latn", "Fon"),
    lang("fra_Latn", "Fransızca"),
    lang("fur_Latn", "Friuli Dili"),
    lang("fuv_Latn", "Nijerya Fulfulde"),
    lang("gla_Latn", "İskoç Galcesi"),
    lang("gle_Latn", "İrlandaca"),
    lang("glg_Latn", "Galiçyaca"),
    lang("grn_Latn", "Guarani"),
    lang("guj_Gujr", "Güceratça"),
    lang("hat_Latn", "Haiti Kreyolu"),
    lang("hau_Latn", "Hausa"),
    lang("heb_Hebr", "İbranice"),
    lang("hin_Deva", "Hintçe"),
    lang("hne_Deva", "Chhattisgarhi"),
    lang("hrv_Latn", "Hırvatça"),
    lang("hun_Latn", "Macarca"),
    lang("hye_Armn", "Ermenice"),
    lang("ibo_Latn", "İgbo"),
    lang("ilo_Latn", "Iloko"),
    lang("ind_Latn", "Endonezce"),
    lang("isl_Latn", "İzlandaca"),
    lang("ita_Latn", "İtalyanca"),
    lang("jav_Latn", "Cava Dili"),
    lang("jpn_Jpan", "Japonca"),
    lang("kab_Latn", "Kabile"),
    lang("kac_Latn", "Jingpho"),
    lang("kam_Latn", "Kamba"),
    lang("kan_Knda", "Kannada"),
    lang("kas_Arab", "Keşmirce (Arapça)"),
    lang("kas_Deva", "Keşmirce (Devanagari)"),
    lang("kat_Geor", "Gürcüce"),
    lang("knc_Arab", "Orta Kanuri (Arapça)"),
    lang("knc_Latn", "Orta Kanuri (Latin)"),
    lang("kaz_Cyrl", "Kazakça"),
    lang("kbp_Latn", "Kabiyè"),
    lang("kea_Latn", "Kabuverdianu"),
    lang("khm_Khmr", "Kmerce"),
    lang("kik_Latn", "Kikuyu"),
    lang("kin_Latn", "Kinyarwanda"),
    lang("kir_Cyrl", "Kırgızca"),
    lang("kmb_Latn", "Kimbundu"),
    lang("kon_Latn", "Kikongo"),
    lang("kor_Hang", "Korece"),
    lang("kmr_Latn", "Kuzey Kürtçe"),
    lang("lao_Laoo", "Laoca"),
    lang("lvs_Latn", "Letonca"),
    lang("lij_Latn", "Ligurya Dili"),
    lang("lim_Latn", "Limburgca"),
    lang("lin_Latn", "Lingala"),
    lang("lit_Latn", "Litvanca"),
    lang("lmo_Latn", "Lombardca"),
    lang("ltg_Latn", "Latgalya Dili"),
    lang("ltz_Latn", "Lüksemburgca"),
    lang("lua_Latn", "Luba-Katanga"),
    lang("lug_Latn", "Ganda"),
    lang("luo_Latn", "Luo"),
    lang("lus_Latn", "Mizo"),
    lang("mag_Deva", "Magahi"),
    lang("mai_Deva", "Maithili"),
    lang("mal_Mlym", "Malayalam"),
    lang("mar_Deva", "Marathi"),
    lang("min_Latn", "Minangkabau"),
    lang("mkd_Cyrl", "Makedonca"),
    lang("plt_Latn", "Plato Malgaşçası"),
    lang("mlt_Latn", "Maltaca"),
    lang("mni_Beng", "Manipuri"),
    lang("khk_Cyrl", "Halh Moğolcası"),
    lang("mos_Latn", "Mossi"),
    lang("mri_Latn", "Maori"),
    lang("zsm_Latn", "Standart Malayca"),
    lang("mya_Mymr", "Burmaca"),
    lang("nld_Latn", "Felemenkçe"),
    lang("nno_Latn", "Norveç Nynorsk"),
    lang("nob_Latn", "Norveç Bokmål"),
    lang("npi_Deva", "Nepalce"),
    lang("nso_Latn", "Pedi"),
    lang("nus_Latn", "Nuer"),
    lang("nya_Latn", "Chichewa"),
    lang("oci_Latn", "Oksitanca"),
    lang("gaz_Latn", "Batı Merkez Oromo"),
    lang("ory_Orya", "Odia"),
    lang("pag_Latn", "Pangasinan"),
    lang("pan_Guru", "Pencapça"),
    lang("pap_Latn", "Papiamento"),
    lang("pol_Latn", "Lehçe"),
    lang("por_Latn", "Portekizce"),
    lang("prs_Arab", "Darice"),
    lang("pbt_Arab", "Güney Peştuca"),
    lang("quy_Latn", "Ayacucho Quechua"),
    lang("ron_Latn", "Rumence"),
    lang("run_Latn", "Rundi"),
    lang("rus_Cyrl", "Rusça"),
    lang("sag_Latn", "Sango"),
    lang("san_Deva", "Sanskrit"),
    lang("sat_Beng", "Santali"),
    lang("scn_Latn", "Sicilyaca"),
    lang("shn_Mymr", "Shan"),
    lang("sin_Sinh", "Sinhala"),
    lang("slk_Latn", "Slovakça"),
    lang("slv_Latn", "Slovence"),
    lang("smo_Latn", "Samoaca"),
    lang("sna_Latn", "Shona"),
    lang("snd_Arab", "Sindhî"),
    lang("som_Latn", "Somalice"),
    lang("sot_Latn", "Güney Sotho"),
    lang("spa_Latn", "İspanyolca"),
    lang("als_Latn", "Tosk Arnavutçası"),
    lang("srd_Latn", "Sardunya Dili"),
    lang("srp_Cyrl", "Sırpça"),
    lang("ssw_Latn", "Swati"),
    lang("sun_Latn", "Sundaca"),
    lang("swe_Latn", "İsveççe"),
    lang("swh_Latn", "Svahili"),
    lang("szl_Latn", "Silezyaca"),
    lang("tam_Taml", "Tamilce"),
    lang("tat_Cyrl", "Tatarca"),
    lang("tel_Telu", "Telugu"),
    lang("tgk_Cyrl", "Tacikçe"),
    lang("tgl_Latn", "Tagalog"),
    lang("tha_Thai", "Tayca"),
    lang("tir_Ethi", "Tigrinya"),
    lang("taq_Latn", "Tamaşek (Latin)"),
    lang("taq_Tfng", "Tamaşek (Tifinag)"),
    lang("tpi_Latn", "Tok Pisin"),
    lang("tsn_Latn", "Tsvana"),
    lang("tso_Latn", "Tsonga"),
    lang("tuk_Latn", "Türkmence"),
    lang("tum_Latn", "Tumbuka"),
    lang("tur_Latn", "Türkçe"),
    lang("twi_Latn", "Twi"),
    lang("tzm_Tfng", "Orta Atlas Tamazight"),
    lang("uig_Arab", "Uygurca"),
    lang("ukr_Cyrl", "Ukraynaca"),
    lang("umb_Latn", "Umbundu"),
    lang("urd_Arab", "Urduca"),
    lang("uzn_Latn", "Özbekçe"),
    lang("vec_Latn", "Venedikçe"),
    lang("vie_Latn", "Vietnamca"),
    lang("war_Latn", "Waray"),
    lang("wol_Latn", "Wolof"),
    lang("xho_Latn", "Xhosa"),
    lang("ydd_Hebr", "Doğu Yidiş"),
    lang("yor_Latn", "Yorubaca"),
    lang("yue_Hant", "Kantonca"),
    lang("zho_Hans", "Çince (Basitleştirilmiş)"),
    lang("zho_Hant", "Çince (Geleneksel)"),
    lang("zul_Latn", "Zuluca"),
];

/// Opus MT `mul-en` source languages.
pub static OPUS_MT_SOURCE_LANGUAGES: &[LanguageOption] = &[
    lang("af", "Afrikaanca"),
    lang("am", "Amharca"),
    lang("ar", "Arapça"),
    lang("ast", "Asturyasça"),
    lang("az", "Azerice"),
    lang("ba", "Başkurtça"),
    lang("be", "Beyaz Rusça"),
    lang("bg", "Bulgarca"),
    lang("bn", "Bengalce"),
    lang("br", "Bretonca"),
    lang("bs", "Boşnakça"),
    lang("ca", "Katalanca"),
    lang("ceb", "Sebuanaca"),
    lang("cs", "Çekçe"),
    lang("cy", "Galce"),
    lang("da", "Danca"),
    lang("de", "Almanca"),
    lang("el", "Yunanca"),
    lang("eo", "Esperanto"),
    lang("es", "İspanyolca"),
    lang("et", "Estonca"),
    lang("eu", "Baskça"),
    lang("fa", "Farsça"),
    lang("fi", "Fince"),
    lang("fr", "Fransızca"),
    lang("fy", "Frizce"),
    lang("ga", "İrlandaca"),
    lang("gl", "Galiçyaca"),
    lang("gu", "Gujarati"),
    lang("ha", "Hausa"),
    lang("he", "İbranice"),
    lang("hi", "Hintçe"),
    lang("hr", "Hırvatça"),
    lang("ht", "Haitice"),
    lang("hu", "Macarca"),
    lang("hy", "Ermenice"),
    lang("id", "Endonezce"),
    lang("ig", "İbo"),
    lang("is", "İzlandaca"),
    lang("it", "İtalyanca"),
    lang("ja", "Japonca"),
    lang("jv", "Cava Dili"),
    lang("ka", "Gürcüce"),
    lang("kk", "Kazakça"),
    lang("km", "Kmerce"),
    lang("kn", "Kannada"),
    lang("ko", "Korece"),
    lang("ku", "Kürtçe"),
    lang("ky", "Kırgızca"),
    lang("lb", "Lüksemburgca"),
    lang("lo", "Laoca"),
    lang("lt", "Litvanca"),
    lang("lv", "Letonca"),
    lang("mg", "Malgaşça"),
    lang("mi", "Maori"),
    lang("mk", "Makedonca"),
    lang("ml", "Malayalam"),
    lang("mn", "Moğolca"),
    lang("mr", "Marathi"),
    lang("ms", "Malayca"),
    lang("mt", "Maltaca"),
    lang("my", "Burma Dili"),
    lang("ne", "Nepalce"),
    lang("nl", "Flemenkçe"),
    lang("no", "Norveççe"),
    lang("ny", "Çiçevaca"),
    lang("or", "Oriya"),
    lang("pa", "Pencapça"),
    lang("pl", "Lehçe"),
    lang("ps", "Peştuca"),
    lang("pt", "Portekizce"),
    lang("ro", "Romence"),
    lang("ru", "Rusça"),
    lang("rw", "Ruandaca"),
    lang("sd", "Sindhi"),
    lang("si", "Seylanca"),
    lang("sk", "Slovakça"),
    lang("sl", "Slovence"),
    lang("sm", "Samoaca"),
    lang("sn", "Şonaca"),
    lang("so", "Somalice"),
    lang("sq", "Arnavutça"),
    lang("sr", "Sırpça"),
    lang("st", "Sesotho"),
    lang("su", "Sundanca"),
    lang("sv", "İsveççe"),
    lang("sw", "Svahili"),
    lang("ta", "Tamilce"),
    lang("te", "Telugu"),
    lang("tg", "Tacikçe"),
    lang("th", "Tayca"),
    lang("tl", "Tagalogca"),
    lang("tr", "Türkçe"),
    lang("uk", "Ukraynaca"),
    lang("ur", "Urduca"),
    lang("uz", "Özbekçe"),
    lang("vi", "Vietnamca"),
    lang("xh", "Xhosa"),
    lang("yi", "Yidişçe"),
    lang("yo", "Yorubaca"),
    lang("zh", "Çince"),
    lang("zu", "Zulu"),
];

/// Opus MT `mul-en` only produces English.
pub static OPUS_MT_TARGET_LANGUAGES: &[LanguageOption] = &[lang("en", "İngilizce")];
