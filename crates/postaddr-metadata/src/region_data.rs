//! Bundled per-country address formats
//!
//! Region code -> JSON node blob. `ZZ` holds the defaults used for regions
//! without their own template.

/// Country code and JSON metadata for every supported region
pub const COUNTRY_FORMATS: &[(&str, &str)] = &[
    ("AC", r#"{"name":"ASCENSION ISLAND","fmt":"%N%n%O%n%A%n%C%n%Z","zip":"ASCN 1ZZ","zipex":"ASCN 1ZZ"}"#),
    ("AD", r#"{"name":"ANDORRA","lang":"ca","languages":"ca","fmt":"%N%n%O%n%A%n%Z %C","zip":"AD[1-7]0\\d","zipex":"AD100,AD501,AD700"}"#),
    ("AE", r#"{"name":"UNITED ARAB EMIRATES","lang":"ar","languages":"ar","fmt":"%N%n%O%n%A%n%S","lfmt":"%N%n%O%n%A%n%S","require":"AS","state_name_type":"emirate"}"#),
    ("AF", r#"{"name":"AFGHANISTAN","lang":"fa","languages":"fa~ps~uz-Arab~tk","fmt":"%N%n%O%n%A%n%C%n%Z","zip":"\\d{4}","zipex":"1001,2601,3801"}"#),
    ("AG", r#"{"name":"ANTIGUA AND BARBUDA","require":"A"}"#),
    ("AI", r#"{"name":"ANGUILLA","fmt":"%N%n%O%n%A%n%C%n%Z","zip":"(?:AI-)?2640","zipex":"2640"}"#),
    ("AL", r#"{"name":"ALBANIA","lang":"sq","languages":"sq","fmt":"%N%n%O%n%A%n%Z%n%C","zip":"\\d{4}","zipex":"1001,1017,3501"}"#),
    ("AM", r#"{"name":"ARMENIA","lang":"hy","languages":"hy","fmt":"%N%n%O%n%A%n%Z%n%C%n%S","lfmt":"%N%n%O%n%A%n%Z%n%C%n%S","zip":"(?:37)?\\d{4}","zipex":"375010,0002,0010"}"#),
    ("AO", r#"{"name":"ANGOLA","lang":"pt","languages":"pt"}"#),
    ("AQ", r#"{"name":"ANTARCTICA"}"#),
    ("AR", r#"{"name":"ARGENTINA","lang":"es","languages":"es","fmt":"%N%n%O%n%A%n%Z %C%n%S","upper":"ACZ","zip":"((?:[A-HJ-NP-Z])?\\d{4})([A-Z]{3})?","zipex":"C1070AAM,C1000WAM,B1000TBU,X5187XAB"}"#),
    ("AS", r#"{"name":"AMERICAN SAMOA","lang":"sm","languages":"sm~en","fmt":"%N%n%O%n%A%n%C %S %Z","require":"ACSZ","upper":"ACNOS","zip_name_type":"zip","state_name_type":"state","zip":"(96799)(?:[ \\-](\\d{4}))?","zipex":"96799"}"#),
    ("AT", r#"{"name":"AUSTRIA","lang":"de","languages":"de","fmt":"%O%n%N%n%A%n%Z %C","require":"ACZ","zip":"\\d{4}","zipex":"1010,3741"}"#),
    ("AU", r#"{"name":"AUSTRALIA","lang":"en","languages":"en","fmt":"%O%n%N%n%A%n%C %S %Z","require":"ACSZ","upper":"CS","state_name_type":"state","locality_name_type":"suburb","zip":"\\d{4}","zipex":"2060,3171,6430,4000,4006,3001"}"#),
    ("AW", r#"{"name":"ARUBA","lang":"nl","languages":"nl~pap"}"#),
    ("AX", r#"{"name":"ALAND ISLANDS","lang":"sv","languages":"sv","fmt":"%O%n%N%n%A%nAX-%Z %C%nÅLAND","require":"ACZ","zip":"22\\d{3}","zipex":"22150,22550,22240,22710,22270,22730,22430","postprefix":"AX-"}"#),
    ("AZ", r#"{"name":"AZERBAIJAN","lang":"az","languages":"az~az-Cyrl","fmt":"%N%n%O%n%A%nAZ %Z %C","zip":"\\d{4}","zipex":"1000","postprefix":"AZ "}"#),
    ("BA", r#"{"name":"BOSNIA AND HERZEGOVINA","lang":"bs","languages":"bs~bs-Cyrl~hr~sr~sr-Latn","fmt":"%N%n%O%n%A%n%Z %C","zip":"\\d{5}","zipex":"71000"}"#),
    ("BB", r#"{"name":"BARBADOS","lang":"en","languages":"en","fmt":"%N%n%O%n%A%n%C, %S %Z","state_name_type":"parish","zip":"BB\\d{5}","zipex":"BB23026,BB22025"}"#),
    ("BD", r#"{"name":"BANGLADESH","lang":"bn","languages":"bn","fmt":"%N%n%O%n%A%n%C - %Z","zip":"\\d{4}","zipex":"1340,1000"}"#),
    ("BE", r#"{"name":"BELGIUM","lang":"nl","languages":"nl~fr~de","fmt":"%O%n%N%n%A%n%Z %C","require":"ACZ","zip":"\\d{4}","zipex":"4000,1000"}"#),
    ("BF", r#"{"name":"BURKINA FASO","lang":"fr","languages":"fr","fmt":"%N%n%O%n%A%n%C %X"}"#),
    ("BG", r#"{"name":"BULGARIA (REP.)","lang":"bg","languages":"bg","fmt":"%N%n%O%n%A%n%Z %C","zip":"\\d{4}","zipex":"1000,1700"}"#),
    ("BH", r#"{"name":"BAHRAIN","lang":"ar","languages":"ar","fmt":"%N%n%O%n%A%n%C %Z","zip":"(?:\\d|1[0-2])\\d{2}","zipex":"317"}"#),
    ("BI", r#"{"name":"BURUNDI","lang":"rn","languages":"rn~fr~en"}"#),
    ("BJ", r#"{"name":"BENIN","lang":"fr","languages":"fr","upper":"AC"}"#),
    ("BL", r#"{"name":"SAINT BARTHELEMY","lang":"fr","languages":"fr","fmt":"%O%n%N%n%A%n%Z %C %X","require":"ACZ","upper":"ACX","zip":"9[78][01]\\d{2}","zipex":"97100"}"#),
    ("BM", r#"{"name":"BERMUDA","lang":"en","languages":"en","fmt":"%N%n%O%n%A%n%C %Z","zip":"[A-Z]{2} ?[A-Z0-9]{2}","zipex":"FL 07,HM GX,HM 12"}"#),
    ("BN", r#"{"name":"BRUNEI DARUSSALAM","lang":"ms","languages":"ms~ms-Arab","fmt":"%N%n%O%n%A%n%C %Z","zip":"[A-Z]{2} ?\\d{4}","zipex":"BT2328,KA1131,BA1511"}"#),
    ("BO", r#"{"name":"BOLIVIA","lang":"es","languages":"es~qu~ay","upper":"AC"}"#),
    ("BQ", r#"{"name":"BONAIRE, SINT EUSTATIUS, AND SABA","lang":"nl","languages":"nl"}"#),
    ("BR", r#"{"name":"BRAZIL","lang":"pt","languages":"pt","fmt":"%O%n%N%n%A%n%D%n%C-%S%n%Z","require":"ASCZ","upper":"CS","state_name_type":"state","sublocality_name_type":"neighborhood","zip":"\\d{5}-?\\d{3}","zipex":"40301-110,70002-900"}"#),
    ("BS", r#"{"name":"BAHAMAS","lang":"en","languages":"en","fmt":"%N%n%O%n%A%n%C, %S","state_name_type":"island"}"#),
    ("BT", r#"{"name":"BHUTAN","lang":"dz","languages":"dz","fmt":"%N%n%O%n%A%n%C %Z","zip":"\\d{5}","zipex":"11001,31101,35003"}"#),
    ("BV", r#"{"name":"BOUVET ISLAND"}"#),
    ("BW", r#"{"name":"BOTSWANA","lang":"en","languages":"en~tn"}"#),
    ("BY", r#"{"name":"BELARUS","lang":"be","languages":"be~ru","fmt":"%O%n%N%n%A%n%Z, %C%n%S","zip":"\\d{6}","zipex":"223016,225860,220050"}"#),
    ("BZ", r#"{"name":"BELIZE"}"#),
    ("CA", r#"{"name":"CANADA","lang":"en","languages":"en~fr","fmt":"%N%n%O%n%A%n%C %S %Z","require":"ACSZ","upper":"ACNOSZ","zip":"[ABCEGHJKLMNPRSTVXY]\\d[ABCEGHJ-NPRSTV-Z] ?\\d[ABCEGHJ-NPRSTV-Z]\\d","zipex":"H3Z 2Y7,V8X 3X4,T0L 1K0,T0H 1A0,K1A 0B1"}"#),
    ("CC", r#"{"name":"COCOS (KEELING) ISLANDS","lang":"en","languages":"en","fmt":"%O%n%N%n%A%n%C %S %Z","upper":"CS","zip":"6799","zipex":"6799"}"#),
    ("CD", r#"{"name":"CONGO (DEM. REP.)","lang":"sw","languages":"sw~lua~fr~ln~kg","fmt":"%N%n%O%n%A%n%C %X"}"#),
    ("CF", r#"{"name":"CENTRAL AFRICAN REPUBLIC","lang":"fr","languages":"fr~sg"}"#),
    ("CG", r#"{"name":"CONGO (REP.)","lang":"fr","languages":"fr~ln"}"#),
    ("CH", r#"{"name":"SWITZERLAND","lang":"de","languages":"de~gsw~fr~it~rm","fmt":"%O%n%N%n%A%nCH-%Z %C","require":"ACZ","upper":"","zip":"\\d{4}","zipex":"2544,1211,1556,3030","postprefix":"CH-"}"#),
    ("CI", r#"{"name":"COTE D'IVOIRE","lang":"fr","languages":"fr","fmt":"%N%n%O%n%X %A %C %X"}"#),
    ("CK", r#"{"name":"COOK ISLANDS","lang":"en","languages":"en"}"#),
    ("CL", r#"{"name":"CHILE","lang":"es","languages":"es","fmt":"%N%n%O%n%A%n%Z %C%n%S","zip":"\\d{7}","zipex":"8340457,8720019,1230000,8329100"}"#),
    ("CM", r#"{"name":"CAMEROON","lang":"fr","languages":"fr~en"}"#),
    ("CN", r#"{"name":"CHINA","lang":"zh","languages":"zh","fmt":"%Z%n%S%C%D%n%A%n%O%n%N","lfmt":"%N%n%O%n%A%n%D%n%C%n%S, %Z","require":"ACSZ","upper":"S","sublocality_name_type":"district","zip":"\\d{6}","zipex":"266033,317204,100096,100808"}"#),
    ("CO", r#"{"name":"COLOMBIA","lang":"es","languages":"es","fmt":"%N%n%O%n%A%n%D%n%C, %S, %Z","require":"AS","state_name_type":"department","zip":"\\d{6}","zipex":"111221,130001,760011"}"#),
    ("CR", r#"{"name":"COSTA RICA","lang":"es","languages":"es","fmt":"%N%n%O%n%A%n%S, %C%n%Z","require":"ACS","zip":"\\d{4,5}|\\d{3}-\\d{4}","zipex":"1000,2010,1001"}"#),
    ("CU", r#"{"name":"CUBA","lang":"es","languages":"es","fmt":"%N%n%O%n%A%n%C %S%n%Z","zip":"\\d{5}","zipex":"10700"}"#),
    ("CV", r#"{"name":"CAPE VERDE","lang":"pt","languages":"pt","fmt":"%N%n%O%n%A%n%Z %C%n%S","state_name_type":"island","zip":"\\d{4}","zipex":"7600"}"#),
    ("CW", r#"{"name":"CURACAO","lang":"pap","languages":"pap~nl"}"#),
    ("CX", r#"{"name":"CHRISTMAS ISLAND","lang":"en","languages":"en","fmt":"%O%n%N%n%A%n%C %S %Z","upper":"CS","zip":"6798","zipex":"6798"}"#),
    ("CY", r#"{"name":"CYPRUS","lang":"el","languages":"el~tr","fmt":"%N%n%O%n%A%n%Z %C","zip":"\\d{4}","zipex":"2008,3304,1900"}"#),
    ("CZ", r#"{"name":"CZECH REP.","lang":"cs","languages":"cs","fmt":"%N%n%O%n%A%n%Z %C","require":"ACZ","zip":"\\d{3} ?\\d{2}","zipex":"100 00,251 66,530 87,110 00,225 99"}"#),
    ("DE", r#"{"name":"GERMANY","lang":"de","languages":"de","fmt":"%N%n%O%n%A%n%Z %C","require":"ACZ","zip":"\\d{5}","zipex":"26133,53225"}"#),
    ("DJ", r#"{"name":"DJIBOUTI","lang":"ar","languages":"ar~fr"}"#),
    ("DK", r#"{"name":"DENMARK","lang":"da","languages":"da~de~kl","fmt":"%N%n%O%n%A%n%Z %C","require":"ACZ","zip":"\\d{4}","zipex":"8660,1566"}"#),
    ("DM", r#"{"name":"DOMINICA","lang":"en","languages":"en"}"#),
    ("DO", r#"{"name":"DOMINICAN REP.","lang":"es","languages":"es","fmt":"%N%n%O%n%A%n%Z %C","zip":"\\d{5}","zipex":"11903,10101"}"#),
    ("DZ", r#"{"name":"ALGERIA","lang":"ar","languages":"ar~fr","fmt":"%N%n%O%n%A%n%Z %C","zip":"\\d{5}","zipex":"40304,16027"}"#),
    ("EC", r#"{"name":"ECUADOR","lang":"es","languages":"es~qu","fmt":"%N%n%O%n%A%n%Z%n%C","upper":"CZ","zip":"\\d{6}","zipex":"090105,092301"}"#),
    ("EE", r#"{"name":"ESTONIA","lang":"et","languages":"et","fmt":"%N%n%O%n%A%n%Z %C %S","require":"ACZ","zip":"\\d{5}","zipex":"69501,11212"}"#),
    ("EG", r#"{"name":"EGYPT","lang":"ar","languages":"ar","fmt":"%N%n%O%n%A%n%C%n%S%n%Z","lfmt":"%N%n%O%n%A%n%C%n%S%n%Z","zip":"\\d{5}","zipex":"12411,11599"}"#),
    ("EH", r#"{"name":"WESTERN SAHARA","lang":"ar","languages":"ar","fmt":"%N%n%O%n%A%n%Z %C","zip":"\\d{5}","zipex":"70000,72000"}"#),
    ("ER", r#"{"name":"ERITREA","lang":"ti","languages":"ti~en~ar"}"#),
    ("ES", r#"{"name":"SPAIN","lang":"es","languages":"es~ca~gl~eu","fmt":"%N%n%O%n%A%n%Z %C %S","require":"ACSZ","upper":"CS","zip":"\\d{5}","zipex":"28039,28300,28070"}"#),
    ("ET", r#"{"name":"ETHIOPIA","lang":"am","languages":"am","fmt":"%N%n%O%n%A%n%Z %C","zip":"\\d{4}","zipex":"1000"}"#),
    ("FI", r#"{"name":"FINLAND","lang":"fi","languages":"fi~sv~sms","fmt":"%O%n%N%n%A%nFI-%Z %C","require":"ACZ","zip":"\\d{5}","zipex":"00550,00011","postprefix":"FI-"}"#),
    ("FJ", r#"{"name":"FIJI"}"#),
    ("FK", r#"{"name":"FALKLAND ISLANDS (MALVINAS)","lang":"en","languages":"en","fmt":"%N%n%O%n%A%n%C%n%Z","require":"ACZ","upper":"CZ","zip":"FIQQ 1ZZ","zipex":"FIQQ 1ZZ"}"#),
    ("FM", r#"{"name":"MICRONESIA (Federated State of)","lang":"en","languages":"en","fmt":"%N%n%O%n%A%n%C %S %Z","require":"ACSZ","upper":"ACNOS","zip_name_type":"zip","state_name_type":"state","zip":"(9694[1-4])(?:[ \\-](\\d{4}))?","zipex":"96941,96944"}"#),
    ("FO", r#"{"name":"FAROE ISLANDS","lang":"fo","languages":"fo","fmt":"%N%n%O%n%A%nFO%Z %C","zip":"\\d{3}","zipex":"100","postprefix":"FO"}"#),
    ("FR", r#"{"name":"FRANCE","lang":"fr","languages":"fr","fmt":"%O%n%N%n%A%n%Z %C %X","require":"ACZ","upper":"CX","zip":"\\d{2} ?\\d{3}","zipex":"33380,34092,33506"}"#),
    ("GA", r#"{"name":"GABON","lang":"fr","languages":"fr"}"#),
    ("GB", r#"{"name":"UNITED KINGDOM","lang":"en","languages":"en~cy~ga~gd","fmt":"%N%n%O%n%A%n%C%n%Z","require":"ACZ","upper":"CZ","locality_name_type":"post_town","zip":"GIR ?0AA|BFPO ?\\d{1,4}|[A-PR-UWYZ][A-HK-Y]?\\d[A-Z\\d]? ?\\d[ABD-HJLNP-UW-Z]{2}","zipex":"EC1Y 8SY,GIR 0AA,M2 5BQ,M34 4AB,CR0 2YR,DN16 9AA,W1A 4ZZ,EC1A 1HQ,OX14 4PG,BS18 8HF,NR25 7HG,RH6 0NP,BH23 6AA,B6 5BA,SO23 9AP,PO1 3AX,BFPO 61"}"#),
    ("GD", r#"{"name":"GRENADA (WEST INDIES)","lang":"en","languages":"en"}"#),
    ("GE", r#"{"name":"GEORGIA","lang":"ka","languages":"ka~ab~os","fmt":"%N%n%O%n%A%n%Z %C","zip":"\\d{4}","zipex":"0101"}"#),
    ("GF", r#"{"name":"FRENCH GUIANA","lang":"fr","languages":"fr","fmt":"%O%n%N%n%A%n%Z %C %X","require":"ACZ","upper":"ACX","zip":"9[78]3\\d{2}","zipex":"97300"}"#),
    ("GG", r#"{"name":"CHANNEL ISLANDS","lang":"en","languages":"en","fmt":"%N%n%O%n%A%n%C%nGUERNSEY%n%Z","require":"ACZ","upper":"CZ","zip":"GY\\d[\\dA-Z]? ?\\d[ABD-HJLN-UW-Z]{2}","zipex":"GY1 1AA,GY2 2BT"}"#),
    ("GH", r#"{"name":"GHANA","lang":"ak","languages":"ak~en~ee~gaa"}"#),
    ("GI", r#"{"name":"GIBRALTAR","lang":"en","languages":"en","fmt":"%N%n%O%n%A%nGIBRALTAR%n%Z","require":"A","zip":"GX11 1AA","zipex":"GX11 1AA"}"#),
    ("GL", r#"{"name":"GREENLAND","lang":"kl","languages":"kl","fmt":"%N%n%O%n%A%n%Z %C","require":"ACZ","zip":"39\\d{2}","zipex":"3900,3950,3911"}"#),
    ("GM", r#"{"name":"GAMBIA","lang":"en","languages":"en"}"#),
    ("GN", r#"{"name":"GUINEA","lang":"fr","languages":"fr","fmt":"%N%n%O%n%Z %A %C","zip":"\\d{3}","zipex":"001,200,100"}"#),
    ("GP", r#"{"name":"GUADELOUPE","lang":"fr","languages":"fr","fmt":"%O%n%N%n%A%n%Z %C %X","require":"ACZ","upper":"ACX","zip":"9[78][01]\\d{2}","zipex":"97100"}"#),
    ("GQ", r#"{"name":"EQUATORIAL GUINEA","lang":"es","languages":"es~fr~pt"}"#),
    ("GR", r#"{"name":"GREECE","lang":"el","languages":"el","fmt":"%N%n%O%n%A%n%Z %C","require":"ACZ","zip":"\\d{3} ?\\d{2}","zipex":"151 24,151 10,101 88"}"#),
    ("GS", r#"{"name":"SOUTH GEORGIA","lang":"en","languages":"en","fmt":"%N%n%O%n%A%n%C%n%Z","require":"ACZ","upper":"CZ","zip":"SIQQ 1ZZ","zipex":"SIQQ 1ZZ"}"#),
    ("GT", r#"{"name":"GUATEMALA","lang":"es","languages":"es~quc","fmt":"%N%n%O%n%A%n%Z- %C","zip":"\\d{5}","zipex":"09001,01501"}"#),
    ("GU", r#"{"name":"GUAM","lang":"en","languages":"en~ch","fmt":"%N%n%O%n%A%n%C %Z","require":"ACZ","upper":"ACNO","zip_name_type":"zip","zip":"(969(?:[12]\\d|3[12]))(?:[ \\-](\\d{4}))?","zipex":"96910,96931"}"#),
    ("GW", r#"{"name":"GUINEA-BISSAU","lang":"pt","languages":"pt","fmt":"%N%n%O%n%A%n%Z %C","zip":"\\d{4}","zipex":"1000,1011"}"#),
    ("GY", r#"{"name":"GUYANA"}"#),
    ("HK", r#"{"name":"HONG KONG","lang":"zh-Hant","languages":"zh-Hant~en","fmt":"%S%n%C%n%A%n%O%n%N","lfmt":"%N%n%O%n%A%n%C%n%S","require":"AS","upper":"S","state_name_type":"area","locality_name_type":"district"}"#),
    ("HM", r#"{"name":"HEARD AND MCDONALD ISLANDS","fmt":"%O%n%N%n%A%n%C %S %Z","upper":"CS","zip":"\\d{4}","zipex":"7050"}"#),
    ("HN", r#"{"name":"HONDURAS","lang":"es","languages":"es","fmt":"%N%n%O%n%A%n%C, %S%n%Z","require":"ACS","state_name_type":"department","zip":"\\d{5}","zipex":"31301"}"#),
    ("HR", r#"{"name":"CROATIA","lang":"hr","languages":"hr~it~vec","fmt":"%N%n%O%n%A%nHR-%Z %C","zip":"\\d{5}","zipex":"10000,21001,10002","postprefix":"HR-"}"#),
    ("HT", r#"{"name":"HAITI","lang":"ht","languages":"ht~fr","fmt":"%N%n%O%n%A%nHT%Z %C","zip":"\\d{4}","zipex":"6120,5310,6110,8510","postprefix":"HT"}"#),
    ("HU", r#"{"name":"HUNGARY (Rep.)","lang":"hu","languages":"hu","fmt":"%N%n%O%n%C%n%A%n%Z","require":"ACZ","upper":"ACNO","zip":"\\d{4}","zipex":"1037,2380,1540"}"#),
    ("ID", r#"{"name":"INDONESIA","lang":"id","languages":"id~su~jv","fmt":"%N%n%O%n%A%n%C%n%S %Z","require":"AS","zip":"\\d{5}","zipex":"40115"}"#),
    ("IE", r#"{"name":"IRELAND","lang":"en","languages":"en~ga","fmt":"%N%n%O%n%A%n%D%n%C%n%S%n%Z","zip_name_type":"eircode","state_name_type":"county","sublocality_name_type":"townland","zip":"[\\dA-Z]{3} ?[\\dA-Z]{4}","zipex":"A65 F4E2"}"#),
    ("IL", r#"{"name":"ISRAEL","lang":"he","languages":"he","fmt":"%N%n%O%n%A%n%C %Z","zip":"\\d{5}(?:\\d{2})?","zipex":"9614303"}"#),
    ("IM", r#"{"name":"ISLE OF MAN","lang":"en","languages":"en~gv","fmt":"%N%n%O%n%A%n%C%n%Z","require":"ACZ","upper":"CZ","zip":"IM\\d[\\dA-Z]? ?\\d[ABD-HJLN-UW-Z]{2}","zipex":"IM2 1AA,IM99 1PS"}"#),
    ("IN", r#"{"name":"INDIA","lang":"en","languages":"en~hi","fmt":"%N%n%O%n%A%n%C %Z%n%S","require":"ACSZ","zip_name_type":"pin","state_name_type":"state","zip":"\\d{6}","zipex":"110034,110001"}"#),
    ("IO", r#"{"name":"BRITISH INDIAN OCEAN TERRITORY","lang":"en","languages":"en","fmt":"%N%n%O%n%A%n%C%n%Z","require":"ACZ","upper":"CZ","zip":"BBND 1ZZ","zipex":"BBND 1ZZ"}"#),
    ("IQ", r#"{"name":"IRAQ","lang":"ar","languages":"ar","fmt":"%O%n%N%n%A%n%C, %S%n%Z","require":"ACS","upper":"CS","zip":"\\d{5}","zipex":"31001"}"#),
    ("IR", r#"{"name":"IRAN","lang":"fa","languages":"fa","fmt":"%O%n%N%n%S%n%C, %D%n%A%n%Z","sublocality_name_type":"neighborhood","zip":"\\d{5}-?\\d{5}","zipex":"11936-12345"}"#),
    ("IS", r#"{"name":"ICELAND","lang":"is","languages":"is","fmt":"%N%n%O%n%A%n%Z %C","zip":"\\d{3}","zipex":"320,121,220,110"}"#),
    ("IT", r#"{"name":"ITALY","lang":"it","languages":"it","fmt":"%N%n%O%n%A%n%Z %C %S","require":"ACSZ","upper":"CS","zip":"\\d{5}","zipex":"00144,47037,39049"}"#),
    ("JE", r#"{"name":"CHANNEL ISLANDS","lang":"en","languages":"en","fmt":"%N%n%O%n%A%n%C%nJERSEY%n%Z","require":"ACZ","upper":"CZ","zip":"JE\\d[\\dA-Z]? ?\\d[ABD-HJLN-UW-Z]{2}","zipex":"JE1 1AA,JE2 2BT"}"#),
    ("JM", r#"{"name":"JAMAICA","lang":"en","languages":"en","fmt":"%N%n%O%n%A%n%C%n%S %X","require":"ACS","state_name_type":"parish"}"#),
    ("JO", r#"{"name":"JORDAN","lang":"ar","languages":"ar","fmt":"%N%n%O%n%A%n%C %Z","zip":"\\d{5}","zipex":"11937,11190"}"#),
    ("JP", r#"{"name":"JAPAN","lang":"ja","languages":"ja","fmt":"〒%Z%n%S%n%A%n%O%n%N","lfmt":"%N%n%O%n%A, %S%n%Z","require":"ASZ","upper":"S","state_name_type":"prefecture","zip":"\\d{3}-?\\d{4}","zipex":"154-0023,350-1106,951-8073,112-0001,208-0032,231-0012"}"#),
    ("KE", r#"{"name":"KENYA","lang":"sw","languages":"sw~en","fmt":"%N%n%O%n%A%n%C%n%Z","zip":"\\d{5}","zipex":"20100,00100"}"#),
    ("KG", r#"{"name":"KYRGYZSTAN","lang":"ky","languages":"ky~ru","fmt":"%N%n%O%n%A%n%Z %C","zip":"\\d{6}","zipex":"720001"}"#),
    ("KH", r#"{"name":"CAMBODIA","lang":"km","languages":"km","fmt":"%N%n%O%n%A%n%C %Z","zip":"\\d{5,6}","zipex":"120101,120108"}"#),
    ("KI", r#"{"name":"KIRIBATI","lang":"en","languages":"en~gil","fmt":"%N%n%O%n%A%n%S%n%C","upper":"ACNOS","state_name_type":"island"}"#),
    ("KM", r#"{"name":"COMOROS","lang":"ar","languages":"ar~fr~zdj","upper":"AC"}"#),
    ("KN", r#"{"name":"SAINT KITTS AND NEVIS","lang":"en","languages":"en","fmt":"%N%n%O%n%A%n%C, %S","require":"ACS","state_name_type":"island"}"#),
    ("KP", r#"{"name":"NORTH KOREA","lang":"ko","languages":"ko","fmt":"%Z%n%S%n%C%n%A%n%O%n%N","lfmt":"%N%n%O%n%A%n%C%n%S, %Z"}"#),
    ("KR", r#"{"name":"SOUTH KOREA","lang":"ko","languages":"ko","fmt":"%S %C%D%n%A%n%O%n%N%n%Z","lfmt":"%N%n%O%n%A%n%D%n%C%n%S%n%Z","require":"ACSZ","upper":"Z","state_name_type":"do_si","sublocality_name_type":"district","zip":"\\d{5}","zipex":"03051"}"#),
    ("KW", r#"{"name":"KUWAIT","lang":"ar","languages":"ar","fmt":"%N%n%O%n%A%n%Z %C","zip":"\\d{5}","zipex":"54541,54551,54404,13009"}"#),
    ("KY", r#"{"name":"CAYMAN ISLANDS","lang":"en","languages":"en","fmt":"%N%n%O%n%A%n%S %Z","require":"AS","state_name_type":"island","zip":"KY\\d-\\d{4}","zipex":"KY1-1100,KY1-1702,KY2-2101"}"#),
    ("KZ", r#"{"name":"KAZAKHSTAN","lang":"kk","languages":"kk~ru","fmt":"%Z%n%S%n%C%n%A%n%O%n%N","zip":"\\d{6}","zipex":"040900,050012"}"#),
    ("LA", r#"{"name":"LAO (PEOPLE'S DEM. REP.)","lang":"lo","languages":"lo","fmt":"%N%n%O%n%A%n%Z %C","zip":"\\d{5}","zipex":"01160,01000"}"#),
    ("LB", r#"{"name":"LEBANON","lang":"ar","languages":"ar","fmt":"%N%n%O%n%A%n%C %Z","zip":"(?:\\d{4})(?: ?(?:\\d{4}))?","zipex":"2038 3054,1107 2810,1000"}"#),
    ("LC", r#"{"name":"SAINT LUCIA","lang":"en","languages":"en"}"#),
    ("LI", r#"{"name":"LIECHTENSTEIN","lang":"de","languages":"de~gsw","fmt":"%O%n%N%n%A%nFL-%Z %C","require":"ACZ","zip":"948[5-9]|949[0-8]","zipex":"9496,9491,9490,9485","postprefix":"FL-"}"#),
    ("LK", r#"{"name":"SRI LANKA","lang":"si","languages":"si~ta","fmt":"%N%n%O%n%A%n%C%n%Z","zip":"\\d{5}","zipex":"20000,00100"}"#),
    ("LR", r#"{"name":"LIBERIA","lang":"en","languages":"en","fmt":"%N%n%O%n%A%n%Z %C","zip":"\\d{4}","zipex":"1000"}"#),
    ("LS", r#"{"name":"LESOTHO","lang":"st","languages":"st~en","fmt":"%N%n%O%n%A%n%C %Z","zip":"\\d{3}","zipex":"100"}"#),
    ("LT", r#"{"name":"LITHUANIA","lang":"lt","languages":"lt","fmt":"%O%n%N%n%A%nLT-%Z %C %S","require":"ACZ","zip":"\\d{5}","zipex":"04340,03500","postprefix":"LT-"}"#),
    ("LU", r#"{"name":"LUXEMBOURG","lang":"fr","languages":"fr~lb~de","fmt":"%O%n%N%n%A%nL-%Z %C","require":"ACZ","zip":"\\d{4}","zipex":"4750,2998","postprefix":"L-"}"#),
    ("LV", r#"{"name":"LATVIA","lang":"lv","languages":"lv","fmt":"%N%n%O%n%A%n%S%n%C, %Z","require":"ACZ","zip":"LV-\\d{4}","zipex":"LV-1073,LV-1000"}"#),
    ("LY", r#"{"name":"LIBYA","lang":"ar","languages":"ar"}"#),
    ("MA", r#"{"name":"MOROCCO","lang":"ar","languages":"ar~fr~tzm","fmt":"%N%n%O%n%A%n%Z %C","zip":"\\d{5}","zipex":"53000,10000,20050,16052"}"#),
    ("MC", r#"{"name":"MONACO","lang":"fr","languages":"fr","fmt":"%N%n%O%n%A%nMC-%Z %C %X","zip":"980\\d{2}","zipex":"98000,98020,98011,98001","postprefix":"MC-"}"#),
    ("MD", r#"{"name":"Rep. MOLDOVA","lang":"ro","languages":"ro","fmt":"%N%n%O%n%A%nMD-%Z %C","zip":"\\d{4}","zipex":"2012,2019","postprefix":"MD-"}"#),
    ("ME", r#"{"name":"MONTENEGRO","lang":"sr-Latn","languages":"sr-Latn","fmt":"%N%n%O%n%A%n%Z %C","zip":"8\\d{4}","zipex":"81257,81258,81217,84314,85366"}"#),
    ("MF", r#"{"name":"SAINT MARTIN","lang":"fr","languages":"fr","fmt":"%O%n%N%n%A%n%Z %C %X","require":"ACZ","upper":"ACX","zip":"9[78][01]\\d{2}","zipex":"97100"}"#),
    ("MG", r#"{"name":"MADAGASCAR","lang":"mg","languages":"mg~fr~en","fmt":"%N%n%O%n%A%n%Z %C","zip":"\\d{3}","zipex":"501,101"}"#),
    ("MH", r#"{"name":"MARSHALL ISLANDS","lang":"en","languages":"en~mh","fmt":"%N%n%O%n%A%n%C %S %Z","require":"ACSZ","upper":"ACNOS","zip_name_type":"zip","state_name_type":"state","zip":"(969[67]\\d)(?:[ \\-](\\d{4}))?","zipex":"96960,96970"}"#),
    ("MK", r#"{"name":"MACEDONIA","lang":"mk","languages":"mk~sq","fmt":"%N%n%O%n%A%n%Z %C","zip":"\\d{4}","zipex":"1314,1321,1443,1062"}"#),
    ("ML", r#"{"name":"MALI","lang":"fr","languages":"fr"}"#),
    ("MM", r#"{"name":"MYANMAR","lang":"my","languages":"my","fmt":"%N%n%O%n%A%n%C, %Z","zip":"\\d{5}","zipex":"11181"}"#),
    ("MN", r#"{"name":"MONGOLIA","lang":"mn","languages":"mn","fmt":"%N%n%O%n%A%n%C%n%S %Z","zip":"\\d{5}","zipex":"65030,65270"}"#),
    ("MO", r#"{"name":"MACAO","lang":"zh-Hant","languages":"zh-Hant~pt","fmt":"%A%n%O%n%N","lfmt":"%N%n%O%n%A","require":"A"}"#),
    ("MP", r#"{"name":"NORTHERN MARIANA ISLANDS","lang":"en","languages":"en","fmt":"%N%n%O%n%A%n%C %S %Z","require":"ACSZ","upper":"ACNOS","zip_name_type":"zip","state_name_type":"state","zip":"(9695[0-2])(?:[ \\-](\\d{4}))?","zipex":"96950,96951,96952"}"#),
    ("MQ", r#"{"name":"MARTINIQUE","lang":"fr","languages":"fr","fmt":"%O%n%N%n%A%n%Z %C %X","require":"ACZ","upper":"ACX","zip":"9[78]2\\d{2}","zipex":"97220"}"#),
    ("MR", r#"{"name":"MAURITANIA","lang":"ar","languages":"ar","upper":"AC"}"#),
    ("MS", r#"{"name":"MONTSERRAT","lang":"en","languages":"en"}"#),
    ("MT", r#"{"name":"MALTA","lang":"mt","languages":"mt~en","fmt":"%N%n%O%n%A%n%C %Z","upper":"CZ","zip":"[A-Z]{3} ?\\d{2,4}","zipex":"NXR 01,ZTN 05,GPO 01,BZN 1130,SPB 6031,VCT 1753"}"#),
    ("MU", r#"{"name":"MAURITIUS","lang":"en","languages":"en~fr","fmt":"%N%n%O%n%A%n%Z%n%C","upper":"CZ","zip":"\\d{3}(?:\\d{2}|[A-Z]{2}\\d{3})","zipex":"42602"}"#),
    ("MV", r#"{"name":"MALDIVES","lang":"dv","languages":"dv","fmt":"%N%n%O%n%A%n%C %Z","zip":"\\d{5}","zipex":"20026"}"#),
    ("MW", r#"{"name":"MALAWI","lang":"en","languages":"en~ny","fmt":"%N%n%O%n%A%n%C %X"}"#),
    ("MX", r#"{"name":"MEXICO","lang":"es","languages":"es","fmt":"%N%n%O%n%A%n%D%n%Z %C, %S","require":"ACSZ","upper":"CSZ","state_name_type":"state","sublocality_name_type":"neighborhood","zip":"\\d{5}","zipex":"02860,77520,06082"}"#),
    ("MY", r#"{"name":"MALAYSIA","lang":"ms","languages":"ms","fmt":"%N%n%O%n%A%n%D%n%Z %C%n%S","require":"ACZ","upper":"CS","state_name_type":"state","sublocality_name_type":"village_township","zip":"\\d{5}","zipex":"43000,50754,88990,50670"}"#),
    ("MZ", r#"{"name":"MOZAMBIQUE","lang":"pt","languages":"pt","fmt":"%N%n%O%n%A%n%Z %C%S","zip":"\\d{4}","zipex":"1102,1119,3212"}"#),
    ("NA", r#"{"name":"NAMIBIA","lang":"en","languages":"en","fmt":"%N%n%O%n%A%n%C%n%Z","zip":"\\d{5}","zipex":"10001,10017"}"#),
    ("NC", r#"{"name":"NEW CALEDONIA","lang":"fr","languages":"fr","fmt":"%O%n%N%n%A%n%Z %C %X","require":"ACZ","upper":"ACX","zip":"988\\d{2}","zipex":"98814,98800,98810"}"#),
    ("NE", r#"{"name":"NIGER","lang":"fr","languages":"fr","fmt":"%N%n%O%n%A%n%Z %C","zip":"\\d{4}","zipex":"8001"}"#),
    ("NF", r#"{"name":"NORFOLK ISLAND","lang":"en","languages":"en","fmt":"%O%n%N%n%A%n%C %S %Z","upper":"CS","zip":"2899","zipex":"2899"}"#),
    ("NG", r#"{"name":"NIGERIA","lang":"en","languages":"en","fmt":"%N%n%O%n%A%n%D%n%C %Z%n%S","upper":"CS","state_name_type":"state","zip":"\\d{6}","zipex":"930283,300001,931104"}"#),
    ("NI", r#"{"name":"NICARAGUA","lang":"es","languages":"es","fmt":"%N%n%O%n%A%n%Z%n%C, %S","upper":"CS","state_name_type":"department","zip":"\\d{5}","zipex":"52000"}"#),
    ("NL", r#"{"name":"NETHERLANDS","lang":"nl","languages":"nl~fy","fmt":"%O%n%N%n%A%n%Z %C","require":"ACZ","zip":"\\d{4} ?[A-Z]{2}","zipex":"1234 AB,2490 AA"}"#),
    ("NO", r#"{"name":"NORWAY","lang":"no","languages":"no~nn~se","fmt":"%N%n%O%n%A%n%Z %C","require":"ACZ","locality_name_type":"post_town","zip":"\\d{4}","zipex":"0025,0107,6631"}"#),
    ("NP", r#"{"name":"NEPAL","lang":"ne","languages":"ne","fmt":"%N%n%O%n%A%n%C %Z","zip":"\\d{5}","zipex":"44601"}"#),
    ("NR", r#"{"name":"NAURU CENTRAL PACIFIC","lang":"en","languages":"en","fmt":"%N%n%O%n%A%n%S","require":"AS","state_name_type":"district"}"#),
    ("NU", r#"{"name":"NIUE","lang":"en","languages":"en~niu"}"#),
    ("NZ", r#"{"name":"NEW ZEALAND","lang":"en","languages":"en~mi","fmt":"%N%n%O%n%A%n%D%n%C %Z","require":"ACZ","zip":"\\d{4}","zipex":"6001,6015,6332,8252,1030"}"#),
    ("OM", r#"{"name":"OMAN","lang":"ar","languages":"ar","fmt":"%N%n%O%n%A%n%Z%n%C","zip":"(?:PC )?\\d{3}","zipex":"133,112,111"}"#),
    ("PA", r#"{"name":"PANAMA (REP.)","lang":"es","languages":"es","fmt":"%N%n%O%n%A%n%C%n%S","upper":"CS"}"#),
    ("PE", r#"{"name":"PERU","lang":"es","languages":"es","fmt":"%N%n%O%n%A%n%C %Z%n%S","locality_name_type":"district","zip":"(?:LIMA \\d{1,2}|CALLAO 0?\\d)|[0-2]\\d{4}","zipex":"LIMA 23,LIMA 42,CALLAO 2,02001"}"#),
    ("PF", r#"{"name":"FRENCH POLYNESIA","lang":"fr","languages":"fr~ty","fmt":"%N%n%O%n%A%n%Z %C %S","require":"ACSZ","upper":"CS","state_name_type":"island","zip":"987\\d{2}","zipex":"98709"}"#),
    ("PG", r#"{"name":"PAPUA NEW GUINEA","lang":"tpi","languages":"tpi~en~ho","fmt":"%N%n%O%n%A%n%C %Z %S","require":"ACS","zip":"\\d{3}","zipex":"111"}"#),
    ("PH", r#"{"name":"PHILIPPINES","lang":"en","languages":"en","fmt":"%N%n%O%n%A%n%D, %C%n%Z %S","zip":"\\d{4}","zipex":"1008,1050,1135,1207,2000,1000"}"#),
    ("PK", r#"{"name":"PAKISTAN","lang":"ur","languages":"ur~en","fmt":"%N%n%O%n%A%n%D%n%C-%Z","zip":"\\d{5}","zipex":"44000"}"#),
    ("PL", r#"{"name":"POLAND","lang":"pl","languages":"pl~de~csb~lt","fmt":"%N%n%O%n%A%n%Z %C","require":"ACZ","zip":"\\d{2}-\\d{3}","zipex":"00-950,05-470,48-300,32-015,00-940"}"#),
    ("PM", r#"{"name":"ST. PIERRE AND MIQUELON","lang":"fr","languages":"fr","fmt":"%O%n%N%n%A%n%Z %C %X","require":"ACZ","upper":"ACX","zip":"9[78]5\\d{2}","zipex":"97500"}"#),
    ("PN", r#"{"name":"PITCAIRN","lang":"en","languages":"en","fmt":"%N%n%O%n%A%n%C%n%Z","require":"ACZ","upper":"CZ","zip":"PCRN 1ZZ","zipex":"PCRN 1ZZ"}"#),
    ("PR", r#"{"name":"PUERTO RICO","lang":"es","languages":"es~en","fmt":"%N%n%O%n%A%n%C PR %Z","require":"ACZ","upper":"ACNO","zip_name_type":"zip","zip":"(00[679]\\d{2})(?:[ \\-](\\d{4}))?","zipex":"00930","postprefix":"PR "}"#),
    ("PS", r#"{"name":"PALESTINIAN TERRITORY","lang":"ar","languages":"ar"}"#),
    ("PT", r#"{"name":"PORTUGAL","lang":"pt","languages":"pt","fmt":"%N%n%O%n%A%n%Z %C","require":"ACZ","zip":"\\d{4}-\\d{3}","zipex":"2725-079,1250-096,1201-950,2860-571,1208-148"}"#),
    ("PW", r#"{"name":"PALAU","lang":"pau","languages":"pau~en","fmt":"%N%n%O%n%A%n%C %S %Z","require":"ACSZ","upper":"ACNOS","zip_name_type":"zip","state_name_type":"state","zip":"(969(?:39|40))(?:[ \\-](\\d{4}))?","zipex":"96940"}"#),
    ("PY", r#"{"name":"PARAGUAY","lang":"gn","languages":"gn~es","fmt":"%N%n%O%n%A%n%Z %C","zip":"\\d{4}","zipex":"1536,1538,1209"}"#),
    ("QA", r#"{"name":"QATAR","lang":"ar","languages":"ar","upper":"AC"}"#),
    ("RE", r#"{"name":"REUNION","lang":"fr","languages":"fr","fmt":"%O%n%N%n%A%n%Z %C %X","require":"ACZ","upper":"ACX","zip":"9[78]4\\d{2}","zipex":"97400"}"#),
    ("RO", r#"{"name":"ROMANIA","lang":"ro","languages":"ro","fmt":"%N%n%O%n%A%n%Z %S %C","require":"ACZ","upper":"AC","zip":"\\d{6}","zipex":"060274,061357,200716"}"#),
    ("RS", r#"{"name":"REPUBLIC OF SERBIA","lang":"sr","languages":"sr~sr-Latn~hu~ro~hr~sk~uk","fmt":"%N%n%O%n%A%n%Z %C","zip":"\\d{5,6}","zipex":"106314"}"#),
    ("RU", r#"{"name":"RUSSIAN FEDERATION","lang":"ru","languages":"ru","fmt":"%N%n%O%n%A%n%C%n%S%n%Z","lfmt":"%N%n%O%n%A%n%C%n%S%n%Z","require":"ACSZ","upper":"AC","state_name_type":"oblast","zip":"\\d{6}","zipex":"247112,103375,188300"}"#),
    ("RW", r#"{"name":"RWANDA","lang":"rw","languages":"rw~en~fr","upper":"AC"}"#),
    ("SA", r#"{"name":"SAUDI ARABIA","lang":"ar","languages":"ar","fmt":"%N%n%O%n%A%n%C %Z","zip":"\\d{5}","zipex":"11564,11187,11142"}"#),
    ("SB", r#"{"name":"SOLOMON ISLANDS","lang":"en","languages":"en"}"#),
    ("SC", r#"{"name":"SEYCHELLES","lang":"fr","languages":"fr~en","fmt":"%N%n%O%n%A%n%C%n%S","upper":"S","state_name_type":"island"}"#),
    ("SD", r#"{"name":"SUDAN","lang":"ar","languages":"ar~en","fmt":"%N%n%O%n%A%n%C%n%Z","locality_name_type":"district","zip":"\\d{5}","zipex":"11042,11113"}"#),
    ("SE", r#"{"name":"SWEDEN","lang":"sv","languages":"sv","fmt":"%O%n%N%n%A%nSE-%Z %C","require":"ACZ","zip":"\\d{3} ?\\d{2}","zipex":"11455,12345,10500","postprefix":"SE-"}"#),
    ("SG", r#"{"name":"REP. OF SINGAPORE","lang":"en","languages":"en~zh~ms~ta","fmt":"%N%n%O%n%A%nSINGAPORE %Z","require":"AZ","zip":"\\d{6}","zipex":"546080,308125,408600"}"#),
    ("SH", r#"{"name":"SAINT HELENA","lang":"en","languages":"en","fmt":"%N%n%O%n%A%n%C%n%Z","upper":"CZ","zip":"(?:ASCN|STHL) 1ZZ","zipex":"STHL 1ZZ"}"#),
    ("SI", r#"{"name":"SLOVENIA","lang":"sl","languages":"sl~vec","fmt":"%N%n%O%n%A%nSI-%Z %C","zip":"\\d{4}","zipex":"4000,1001,2500","postprefix":"SI-"}"#),
    ("SJ", r#"{"name":"SVALBARD AND JAN MAYEN ISLANDS","lang":"nb","languages":"nb","fmt":"%N%n%O%n%A%n%Z %C","require":"ACZ","locality_name_type":"post_town","zip":"\\d{4}","zipex":"9170"}"#),
    ("SK", r#"{"name":"SLOVAKIA","lang":"sk","languages":"sk","fmt":"%N%n%O%n%A%n%Z %C","require":"ACZ","zip":"\\d{3} ?\\d{2}","zipex":"010 01,023 14,972 48,921 01,975 99"}"#),
    ("SL", r#"{"name":"SIERRA LEONE","lang":"en","languages":"en"}"#),
    ("SM", r#"{"name":"SAN MARINO","lang":"it","languages":"it","fmt":"%N%n%O%n%A%n%Z %C","require":"AZ","zip":"4789\\d","zipex":"47890,47891,47895,47899"}"#),
    ("SN", r#"{"name":"SENEGAL","lang":"wo","languages":"wo~fr~ff","fmt":"%N%n%O%n%A%n%Z %C","zip":"\\d{5}","zipex":"12500,46024,16556,10000"}"#),
    ("SO", r#"{"name":"SOMALIA","lang":"so","languages":"so","fmt":"%N%n%O%n%A%n%C, %S %Z","require":"ACS","upper":"ACS","zip":"[A-Z]{2} ?\\d{5}","zipex":"JH 09010,AD 11010"}"#),
    ("SR", r#"{"name":"SURINAME","lang":"nl","languages":"nl","fmt":"%N%n%O%n%A%n%C%n%S","upper":"AS"}"#),
    ("SS", r#"{"name":"SOUTH SUDAN","lang":"en","languages":"en"}"#),
    ("ST", r#"{"name":"SAO TOME AND PRINCIPE","lang":"pt","languages":"pt"}"#),
    ("SV", r#"{"name":"EL SALVADOR","lang":"es","languages":"es","fmt":"%N%n%O%n%A%n%Z-%C%n%S","require":"ACS","upper":"CSZ","zip":"CP [1-3][1-7][0-2]\\d","zipex":"CP 1101"}"#),
    ("SX", r#"{"name":"SINT MAARTEN","lang":"en","languages":"en~nl"}"#),
    ("SY", r#"{"name":"SYRIA","lang":"ar","languages":"ar~fr","upper":"AC"}"#),
    ("SZ", r#"{"name":"SWAZILAND","lang":"en","languages":"en~ss","fmt":"%N%n%O%n%A%n%C%n%Z","upper":"ACZ","zip":"[HLMS]\\d{3}","zipex":"H100"}"#),
    ("TA", r#"{"name":"TRISTAN DA CUNHA","lang":"en","languages":"en","fmt":"%N%n%O%n%A%n%C%n%Z","zip":"TDCU 1ZZ","zipex":"TDCU 1ZZ"}"#),
    ("TC", r#"{"name":"TURKS AND CAICOS ISLANDS","lang":"en","languages":"en","fmt":"%N%n%O%n%A%n%C%n%Z","require":"ACZ","upper":"CZ","zip":"TKCA 1ZZ","zipex":"TKCA 1ZZ"}"#),
    ("TD", r#"{"name":"CHAD","lang":"fr","languages":"fr~ar"}"#),
    ("TF", r#"{"name":"FRENCH SOUTHERN TERRITORIES","lang":"fr","languages":"fr"}"#),
    ("TG", r#"{"name":"TOGO","lang":"fr","languages":"fr"}"#),
    ("TH", r#"{"name":"THAILAND","lang":"th","languages":"th","fmt":"%N%n%O%n%A%n%D %C%n%S %Z","lfmt":"%N%n%O%n%A%n%D, %C%n%S %Z","upper":"S","zip":"\\d{5}","zipex":"10150,10210"}"#),
    ("TJ", r#"{"name":"TAJIKISTAN","lang":"tg","languages":"tg","fmt":"%N%n%O%n%A%n%Z %C","zip":"\\d{6}","zipex":"735450,734025"}"#),
    ("TK", r#"{"name":"TOKELAU","lang":"en","languages":"en~tkl"}"#),
    ("TL", r#"{"name":"TIMOR-LESTE","lang":"pt","languages":"pt~tet"}"#),
    ("TM", r#"{"name":"TURKMENISTAN","lang":"tk","languages":"tk","fmt":"%N%n%O%n%A%n%Z %C","zip":"\\d{6}","zipex":"744000"}"#),
    ("TN", r#"{"name":"TUNISIA","lang":"ar","languages":"ar~fr","fmt":"%N%n%O%n%A%n%Z %C","zip":"\\d{4}","zipex":"1002,8129,3100,1030"}"#),
    ("TO", r#"{"name":"TONGA"}"#),
    ("TR", r#"{"name":"TURKEY","lang":"tr","languages":"tr","fmt":"%N%n%O%n%A%n%Z %C/%S","require":"ACZ","locality_name_type":"district","zip":"\\d{5}","zipex":"01960,06101"}"#),
    ("TT", r#"{"name":"TRINIDAD AND TOBAGO","lang":"en","languages":"en"}"#),
    ("TV", r#"{"name":"TUVALU","lang":"tyv","languages":"tyv","fmt":"%N%n%O%n%A%n%C%n%S","upper":"ACS","state_name_type":"island"}"#),
    ("TW", r#"{"name":"TAIWAN","lang":"zh-Hant","languages":"zh-Hant","fmt":"%Z%n%S%C%n%A%n%O%n%N","lfmt":"%N%n%O%n%A%n%C, %S %Z","require":"ACSZ","state_name_type":"county","locality_name_type":"district","zip":"\\d{3}(?:\\d{2,3})?","zipex":"104,106,10603,40867"}"#),
    ("TZ", r#"{"name":"TANZANIA (UNITED REP.)","lang":"sw","languages":"sw~en","fmt":"%N%n%O%n%A%n%Z %C","zip":"\\d{4,5}","zipex":"6090,34413"}"#),
    ("UA", r#"{"name":"UKRAINE","lang":"uk","languages":"uk","fmt":"%N%n%O%n%A%n%C%n%S%n%Z","lfmt":"%N%n%O%n%A%n%C%n%S%n%Z","require":"ACZ","state_name_type":"oblast","zip":"\\d{5}","zipex":"15432,01055,01001"}"#),
    ("UG", r#"{"name":"UGANDA","lang":"sw","languages":"sw~en"}"#),
    ("UM", r#"{"name":"UNITED STATES MINOR OUTLYING ISLANDS","lang":"en","languages":"en","fmt":"%N%n%O%n%A%n%C %S %Z","require":"ACS","upper":"ACNOS","zip_name_type":"zip","state_name_type":"state","zip":"96898","zipex":"96898"}"#),
    ("US", r#"{"name":"UNITED STATES","lang":"en","languages":"en","fmt":"%N%n%O%n%A%n%C, %S %Z","require":"ACSZ","upper":"CS","zip_name_type":"zip","state_name_type":"state","zip":"(\\d{5})(?:[ \\-](\\d{4}))?","zipex":"95014,22162-1010","posturl":"https://tools.usps.com/go/ZipLookupAction!input.action"}"#),
    ("UY", r#"{"name":"URUGUAY","lang":"es","languages":"es","fmt":"%N%n%O%n%A%n%Z %C %S","upper":"CS","zip":"\\d{5}","zipex":"11600"}"#),
    ("UZ", r#"{"name":"UZBEKISTAN","lang":"uz","languages":"uz~uz-Cyrl","fmt":"%N%n%O%n%A%n%Z %C%n%S","upper":"CS","zip":"\\d{6}","zipex":"702100,700000"}"#),
    ("VA", r#"{"name":"VATICAN","lang":"it","languages":"it","fmt":"%N%n%O%n%A%n%Z %C","zip":"00120","zipex":"00120"}"#),
    ("VC", r#"{"name":"SAINT VINCENT AND THE GRENADINES (ANTILLES)","lang":"en","languages":"en","fmt":"%N%n%O%n%A%n%C %Z","zip":"VC\\d{4}","zipex":"VC0100,VC0110,VC0400"}"#),
    ("VE", r#"{"name":"VENEZUELA","lang":"es","languages":"es","fmt":"%N%n%O%n%A%n%C %Z, %S","require":"ACS","upper":"CS","zip":"\\d{4}","zipex":"1010,3001,8011,1020"}"#),
    ("VG", r#"{"name":"VIRGIN ISLANDS (BRITISH)","lang":"en","languages":"en","fmt":"%N%n%O%n%A%n%C%n%Z","require":"A","zip":"VG\\d{4}","zipex":"VG1110,VG1150,VG1160"}"#),
    ("VI", r#"{"name":"VIRGIN ISLANDS (U.S.)","lang":"en","languages":"en","fmt":"%N%n%O%n%A%n%C %S %Z","require":"ACSZ","upper":"ACNOS","zip_name_type":"zip","state_name_type":"state","zip":"(008(?:(?:[0-4]\\d)|(?:5[01])))(?:[ \\-](\\d{4}))?","zipex":"00802-1222,00850-9802"}"#),
    ("VN", r#"{"name":"VIET NAM","lang":"vi","languages":"vi","fmt":"%N%n%O%n%A%n%C%n%S %Z","lfmt":"%N%n%O%n%A%n%C%n%S %Z","zip":"\\d{5}\\d?","zipex":"70010,55999"}"#),
    ("VU", r#"{"name":"VANUATU"}"#),
    ("WF", r#"{"name":"WALLIS AND FUTUNA ISLANDS","lang":"fr","languages":"fr","fmt":"%O%n%N%n%A%n%Z %C %X","require":"ACZ","upper":"ACX","zip":"986\\d{2}","zipex":"98600"}"#),
    ("WS", r#"{"name":"SAMOA","lang":"sm","languages":"sm~en"}"#),
    ("XK", r#"{"name":"KOSOVO","lang":"sq","languages":"sq~sr~sr-Latn","fmt":"%N%n%O%n%A%n%Z %C","zip":"[1-7]\\d{4}","zipex":"10000"}"#),
    ("YE", r#"{"name":"YEMEN","lang":"ar","languages":"ar"}"#),
    ("YT", r#"{"name":"MAYOTTE","lang":"fr","languages":"fr","fmt":"%O%n%N%n%A%n%Z %C %X","require":"ACZ","upper":"ACX","zip":"976\\d{2}","zipex":"97600"}"#),
    ("ZA", r#"{"name":"SOUTH AFRICA","lang":"en","languages":"en","fmt":"%N%n%O%n%A%n%D%n%C%n%Z","require":"ACZ","zip":"\\d{4}","zipex":"0083,1451,0083"}"#),
    ("ZM", r#"{"name":"ZAMBIA","lang":"en","languages":"en","fmt":"%N%n%O%n%A%n%Z %C","zip":"\\d{5}","zipex":"50100,50101"}"#),
    ("ZW", r#"{"name":"ZIMBABWE","lang":"sn","languages":"sn~en~nd"}"#),
    ("ZZ", r#"{"fmt":"%N%n%O%n%A%n%C","require":"AC","upper":"C","zip_name_type":"postal","state_name_type":"province","locality_name_type":"city","sublocality_name_type":"suburb"}"#),
];
