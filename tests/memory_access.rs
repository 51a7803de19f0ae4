// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use m68000_decoder::{DecodeError, MemoryAccess, MemoryIter, WordSource};

#[test]
fn memory_access_slice() {
    let mut bytes = [0x01u8, 0x23, 0x45, 0x67, 0x89, 0xAB];
    let mut words = [0x0123u16, 0x4567, 0x89AB];
    let mem8 = &mut bytes[..];
    let mem16 = &mut words[..];

    for i in (0..6).step_by(2) {
        assert_eq!(mem8.get_word(i), mem16.get_word(i));
    }
    assert_eq!(mem8.get_word(2), Some(0x4567));
    assert_eq!(mem8.get_long(2), Some(0x4567_89AB));
    assert_eq!(mem16.get_long(0), Some(0x0123_4567));

    // Unaligned reads are only possible in a byte image.
    assert_eq!(mem8.get_word(1), Some(0x2345));
    assert_eq!(mem16.get_word(1), None);

    assert_eq!(mem8.get_word(5), None);
    assert_eq!(mem8.get_long(4), None);
    assert_eq!(mem16.get_word(6), None);
    assert_eq!(mem16.get_long(4), None);
    assert_eq!(mem8.get_long(u32::MAX - 1), None);
}

#[test]
fn word_source() {
    let mut code = [0xE1F9u16, 0x0001, 0x2345, 0xFFFF];
    let mut iter = MemoryIter::new(&mut code[..], 0);

    assert_eq!(iter.next_addr(), 0);
    assert_eq!(iter.fetch_word(), Ok(0xE1F9));
    assert_eq!(iter.next_addr(), 2);
    assert_eq!(iter.fetch_long(), Ok(0x0001_2345));
    assert_eq!(iter.next_addr(), 6);
    assert_eq!(iter.consumed(), 6);

    assert_eq!(iter.fetch_long(), Err(DecodeError::AccessError(6)));
    assert_eq!(iter.consumed(), 6);
    assert_eq!(iter.fetch_word(), Ok(0xFFFF));
    assert_eq!(iter.fetch_word(), Err(DecodeError::AccessError(8)));
    assert_eq!(iter.consumed(), 8);

    iter.reset();
    assert_eq!(iter.next_addr(), 0);
    iter.skip(2);
    assert_eq!(iter.pc, 2);
    assert_eq!(iter.fetch_word(), Ok(0x0001));
}
