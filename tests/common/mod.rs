//! Small hand-written corpora in the same shape as the full reference files.

#![allow(dead_code)]

pub const NOUN_CORPUS: &str = "Shabda reference, combined.

Sanskrit Header: 1. राम अकारान्तः पुंलिङ्गः Rama (name)
<<TABLE>>
प्रथमा\tरामः\tरामौ\tरामाः
द्वितीया\tरामम्\tरामौ\tरामान्
तृतीया\tरामेण\tरामाभ्याम्\tरामैः
चतुर्थी\tरामाय\tरामाभ्याम्\tरामेभ्यः
पञ्चमी\tरामात्, रामाद्\tरामाभ्याम्\tरामेभ्यः
षष्ठी\tरामस्य\tरामयोः\tरामाणाम्
सप्तमी\tरामे\tरामयोः\tरामेषु
सम्बोधन\tहे राम\tहे रामौ
</TABLE>
<<INFO>>
अकारान्तः पुंलिङ्गः शब्दः।
</INFO>

Sanskrit Header: 2. वन अकारान्तः नपुंसकलिङ्गः forest
<<TABLE>>
प्रथमा\tवनम्\tवने\tवनानि
द्वितीया\tवनम्\tवने\tवनानि
पञ्चमी\tवनात्\tवनाभ्याम्\tवनेभ्यः
सप्तमी\tवने\tवनयोः\tवनेषु
</TABLE>
<<INFO>>
नपुंसकलिङ्गः।
</INFO>

Sanskrit Header: malformed heading
<<TABLE>>
प्रथमा\tग्रामः\tग्रामौ\tग्रामाः
</TABLE>
";

pub const VERB_CORPUS: &str = "Dhatu reference, combined.

Heading: 1. (१) गम् गतौ (भ्वादिः शप् सकर्मकः अनिट्)
कर्तरि लट्
गच्छति गच्छतः गच्छन्ति
गच्छसि गच्छथः गच्छथ
गच्छामि गच्छावः गच्छामः

कर्तरि लङ्
अगच्छत् अगच्छताम् अगच्छन्
अगच्छः अगच्छतम् अगच्छत
अगच्छम् अगच्छाव अगच्छाम

Heading: 2. (२) पठ् व्यक्तायां (भ्वादिः शप् सकर्मकः सेट्)
कर्तरि लट्
पठति पठतः पठन्ति
पठसि पठथः पठथ
पठामि पठावः पठामः

Heading: 3. (३) पत् गतौ (भ्वादिः शप् अकर्मकः सेट्)
कर्तरि लट्
पतति पततः पतन्ति
";
