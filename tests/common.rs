// Oscar Wilde, preface to The Picture of Dorian Gray
#[allow(dead_code)]
pub const PASSAGE: &[u8] = b"\
The artist is the creator of beautiful things. To reveal art and conceal the artist \n\
is art's aim. The critic is he who can translate into another manner or a new material his impression \n\
of beautiful things. The highest, as the lowest, form of criticism is a mode of autobiography. Those \n\
who find ugly meanings in beautiful things are corrupt without being charming. This is a fault. Those \n\
who find beautiful meanings in beautiful things are the cultivated. For these there is hope. They are \n\
the elect to whom beautiful things mean only Beauty. There is no such thing as a moral or an immoral \n\
book. Books are well written, or badly written. That is all. The nineteenth-century dislike of realism \n\
is the rage of Caliban seeing his own face in a glass. The nineteenth-century dislike of Romanticism \n\
is the rage of Caliban not seeing his own face in a glass. The moral life of man forms part of the subject \n\
matter of the artist, but the morality of art consists in the perfect use of an imperfect medium. No artist \n\
desires to prove anything. Even things that are true can be proved. No artist has ethical sympathies. An \n\
ethical sympathy in an artist is an unpardonable mannerism of style. No artist is ever morbid. The artist \n\
can express everything. Thought and language are to the artist instruments of an art. Vice and virtue are \n\
to the artist materials for an art. From the point of view of form, the type of all the arts is the art \n\
of the musician. From the point of view of feeling, the actor's craft is the type. All art is at once \n\
surface and symbol. Those who go beneath the surface do so at their peril. Those who read the symbol do \n\
so at their peril. It is the spectator, and not life, that art really mirrors. Diversity of opinion about \n\
a work of art shows that the work is new, complex, vital. When critics disagree the artist is in accord \n\
with himself. We can forgive a man for making a useful thing as long as he does not admire it. The only \n\
excuse for making a useless thing is that one admires it intensely. All art is quite useless.\n";

#[allow(dead_code)]
pub fn to_str(bytes: &[u8]) -> &str {
    core::str::from_utf8(bytes).unwrap()
}

// count of letters in a byte string
#[allow(dead_code)]
pub fn letter_count(bytes: &[u8]) -> usize {
    bytes.iter().filter(|b| b.is_ascii_alphabetic()).count()
}
